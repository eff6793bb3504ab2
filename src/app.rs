use dioxus::desktop::use_window;
use dioxus::prelude::*;
use rmgstudio_core::{document, EditorState, Settings, Template};

use crate::context::{get_config_dir, settings_path, StatusMessage};
use crate::pages::{Army, Bans, Connections, Features, General, Graph, Pandora, Shops, Terrains, Zones};
use crate::theme::GLOBAL_STYLES;

/// Application routes, one per editor panel.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    General {},
    #[route("/zones")]
    Zones {},
    #[route("/connections")]
    Connections {},
    #[route("/shops")]
    Shops {},
    #[route("/terrains")]
    Terrains {},
    #[route("/army")]
    Army {},
    #[route("/features")]
    Features {},
    #[route("/bans")]
    Bans {},
    #[route("/pandora")]
    Pandora {},
    #[route("/graph")]
    Graph {},
}

/// Root application component.
///
/// Provides global styles, the editor session, settings and routing.
#[component]
pub fn App() -> Element {
    let (session, opened) = use_hook(initial_session);
    let status: Signal<Option<StatusMessage>> = use_signal(|| opened.clone());
    let settings = use_signal(|| {
        let mut settings = Settings::load_or_default(&settings_path());
        settings.recent_files.retain(|p| p.exists());
        if let Some(path) = &session.path {
            settings.push_recent(path);
        }
        settings
    });
    let editor = use_signal(|| session.clone());

    use_context_provider(|| editor);
    use_context_provider(|| settings);
    use_context_provider(|| status);

    // Keep the window title in sync with the document
    let window = use_window();
    use_effect(move || {
        let title = format!("{} | RMG Studio", editor.read().title());
        window.set_title(&title);
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Open the command line document, or start from a starter template
fn initial_session() -> (EditorState, Option<StatusMessage>) {
    let Some(path) = crate::get_initial_file() else {
        tracing::debug!(config_dir = ?get_config_dir(), "starting with a new template");
        return (EditorState::new(Template::starter("New Template", 4)), None);
    };

    match document::load_template(&path) {
        Ok(template) => {
            let message = StatusMessage::info(format!("Opened {}", path.display()));
            (EditorState::opened(template, path), Some(message))
        }
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to open template: {}", e);
            let message = StatusMessage::error(format!("Could not open {}: {}", path.display(), e));
            (EditorState::new(Template::starter("New Template", 4)), Some(message))
        }
    }
}
