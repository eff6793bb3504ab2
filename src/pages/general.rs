use dioxus::prelude::*;
use rmgstudio_core::{MapSize, Template};
use rmgstudio_ui::options::{map_size_options, optional_key};
use rmgstudio_ui::{to_u8, CountField, OptionalTextField, Section, Select, TextArea, TextField};

use crate::components::{EditorFrame, Panel};
use crate::context::{apply_edit, use_editor};

/// Template name, description and player/map settings
#[component]
pub fn General() -> Element {
    let editor = use_editor();
    let template = editor.read().document.clone();

    let t = template.clone();
    let set_name = move |name: String| apply_edit(editor, Template { name, ..t.clone() });
    let t = template.clone();
    let set_description = move |description: Option<String>| {
        apply_edit(
            editor,
            Template {
                description,
                ..t.clone()
            },
        )
    };
    let t = template.clone();
    let set_version = move |version: Option<String>| apply_edit(editor, Template { version, ..t.clone() });
    let t = template.clone();
    let set_min = move |min: Option<u32>| {
        apply_edit(
            editor,
            Template {
                min_players: to_u8(min),
                ..t.clone()
            },
        )
    };
    let t = template.clone();
    let set_max = move |max: Option<u32>| {
        apply_edit(
            editor,
            Template {
                max_players: to_u8(max),
                ..t.clone()
            },
        )
    };
    let t = template.clone();
    let set_map_size = move |key: String| {
        apply_edit(
            editor,
            Template {
                map_size: MapSize::from_key(&key),
                ..t.clone()
            },
        )
    };

    let start_zones = template
        .zones
        .iter()
        .filter(|z| z.kind == rmgstudio_core::ZoneKind::Start)
        .count();

    rsx! {
        EditorFrame { current: Panel::General,
            Section { title: "Template".to_string(),
                div { class: "card-grid",
                    TextField {
                        label: "name".to_string(),
                        value: template.name.clone(),
                        invalid: template.name.trim().is_empty(),
                        on_change: set_name,
                    }
                    OptionalTextField {
                        label: "version".to_string(),
                        value: template.version.clone(),
                        placeholder: "1.0".to_string(),
                        on_change: set_version,
                    }
                    Select {
                        label: "map size".to_string(),
                        options: map_size_options(),
                        selected: optional_key(template.map_size, MapSize::key),
                        empty_label: "any".to_string(),
                        on_change: set_map_size,
                    }
                }
                TextArea {
                    label: "description".to_string(),
                    value: template.description.clone(),
                    rows: 4,
                    on_change: set_description,
                }
            }
            Section { title: "Players".to_string(), subtitle: format!("{} start zones", start_zones),
                div { class: "card-grid",
                    CountField {
                        label: "min players".to_string(),
                        value: template.min_players.map(u32::from),
                        on_change: set_min,
                    }
                    CountField {
                        label: "max players".to_string(),
                        value: template.max_players.map(u32::from),
                        on_change: set_max,
                    }
                }
            }
            Section { title: "Contents".to_string(),
                ul { class: "summary-list",
                    li { "{template.zones.len()} zones" }
                    li { "{template.connections.len()} connections" }
                    li { "{template.shops.len()} shops" }
                    li { "{template.pandora_boxes.len()} pandora boxes" }
                    li { "{template.bans.total()} bans" }
                }
            }
        }
    }
}
