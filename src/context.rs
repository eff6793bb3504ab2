//! Shared editor state for RMG Studio.
//!
//! The root [`App`](crate::app::App) provides three signals; panels reach
//! them through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let mut editor = use_editor();
//! let template = editor.read().document.clone();
//!
//! // Copy-on-write edit
//! apply_edit(editor, Template { name: "Jebus".into(), ..template });
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use rmgstudio_core::{EditorState, Settings, StudioResult, Template};

/// Last message shown in the status bar
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }
}

/// Get the config directory for the application.
pub fn get_config_dir() -> PathBuf {
    crate::get_config_dir()
}

/// Settings file location
pub fn settings_path() -> PathBuf {
    Settings::path_in(&get_config_dir())
}

/// Hook to access the editing session
pub fn use_editor() -> Signal<EditorState> {
    use_context::<Signal<EditorState>>()
}

/// Hook to access persistent settings
pub fn use_settings() -> Signal<Settings> {
    use_context::<Signal<Settings>>()
}

/// Hook to access the status bar message
pub fn use_status() -> Signal<Option<StatusMessage>> {
    use_context::<Signal<Option<StatusMessage>>>()
}

/// Swap in an edited document, recording undo history
pub fn apply_edit(mut editor: Signal<EditorState>, document: Template) {
    editor.write().apply(document);
}

/// Apply a fallible edit; failures go to the status bar
pub fn apply_result(
    editor: Signal<EditorState>,
    mut status: Signal<Option<StatusMessage>>,
    result: StudioResult<Template>,
) {
    match result {
        Ok(document) => apply_edit(editor, document),
        Err(e) => {
            tracing::warn!("edit rejected: {}", e);
            status.set(Some(StatusMessage::error(e.to_string())));
        }
    }
}

/// Write the current settings to disk; failures are only logged
pub fn persist_settings(settings: Signal<Settings>) {
    if let Err(e) = settings.read().save(&settings_path()) {
        tracing::error!("Failed to save settings: {}", e);
    }
}

/// Remember a path in the recent files list and persist settings
pub fn remember_file(mut settings: Signal<Settings>, path: &std::path::Path) {
    settings.write().push_recent(path);
    persist_settings(settings);
}

/// File name stem derived from a template name, e.g. `jebus-cross`
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let stem = stem.trim_matches('-');
    if stem.is_empty() {
        "template".to_string()
    } else {
        stem.to_string()
    }
}
