//! Editor Frame
//!
//! Page chrome shared by every panel: toolbar, panel tabs, the panel body
//! and the status bar.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{StatusBar, Toolbar};
use crate::context::use_editor;

/// Editor panel within the application
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    General,
    Zones,
    Connections,
    Shops,
    Terrains,
    Army,
    Features,
    Bans,
    Pandora,
    Graph,
}

impl Panel {
    pub const ALL: [Panel; 10] = [
        Panel::General,
        Panel::Zones,
        Panel::Connections,
        Panel::Shops,
        Panel::Terrains,
        Panel::Army,
        Panel::Features,
        Panel::Bans,
        Panel::Pandora,
        Panel::Graph,
    ];

    /// Get the tab label for this panel
    pub fn display_name(&self) -> &'static str {
        match self {
            Panel::General => "General",
            Panel::Zones => "Zones",
            Panel::Connections => "Connections",
            Panel::Shops => "Shops",
            Panel::Terrains => "Terrains",
            Panel::Army => "Army",
            Panel::Features => "Features",
            Panel::Bans => "Bans",
            Panel::Pandora => "Pandora",
            Panel::Graph => "Graph",
        }
    }

    /// Get the route for this panel
    pub fn route(&self) -> Route {
        match self {
            Panel::General => Route::General {},
            Panel::Zones => Route::Zones {},
            Panel::Connections => Route::Connections {},
            Panel::Shops => Route::Shops {},
            Panel::Terrains => Route::Terrains {},
            Panel::Army => Route::Army {},
            Panel::Features => Route::Features {},
            Panel::Bans => Route::Bans {},
            Panel::Pandora => Route::Pandora {},
            Panel::Graph => Route::Graph {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct EditorFrameProps {
    /// Panel being shown
    pub current: Panel,
    pub children: Element,
}

#[component]
pub fn EditorFrame(props: EditorFrameProps) -> Element {
    let editor = use_editor();
    let title = editor.read().title();

    rsx! {
        div { class: "editor-shell",
            header { class: "editor-header",
                div { class: "editor-header-inner",
                    h1 { class: "app-title", "RMG Studio" }
                    span { class: "document-title", "{title}" }
                }
                Toolbar {}
                nav { class: "panel-tabs",
                    for panel in Panel::ALL {
                        Link {
                            key: "{panel.display_name()}",
                            to: panel.route(),
                            class: if panel == props.current { "panel-tab active" } else { "panel-tab" },
                            "{panel.display_name()}"
                        }
                    }
                }
            }
            main { class: "editor-body", {props.children} }
            StatusBar {}
        }
    }
}
