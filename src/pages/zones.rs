use dioxus::prelude::*;
use rmgstudio_core::Zone;
use rmgstudio_ui::{Button, ButtonVariant, EmptyHint, Section};

use crate::components::{EditorFrame, Panel, ZoneCard};
use crate::context::{apply_edit, apply_result, use_editor, use_status};

#[component]
pub fn Zones() -> Element {
    let editor = use_editor();
    let status = use_status();
    let template = editor.read().document.clone();
    let ids = template.zone_ids();

    let t = template.clone();
    let add_zone = move |_| apply_edit(editor, t.add_zone());

    rsx! {
        EditorFrame { current: Panel::Zones,
            Section { title: "Zones".to_string(), subtitle: format!("{}", template.zones.len()),
                div { class: "section-toolbar",
                    Button { variant: ButtonVariant::Badge, onclick: add_zone, "+ add zone" }
                }
                if template.zones.is_empty() {
                    EmptyHint { text: "No zones yet.".to_string() }
                }
                div { class: "card-list",
                    for (index, zone) in template.zones.iter().enumerate() {
                        {
                            let id = zone.id.clone();
                            let other_ids: Vec<String> = ids
                                .iter()
                                .enumerate()
                                .filter(|(i, _)| *i != index)
                                .map(|(_, other)| other.clone())
                                .collect();
                            let t_change = template.clone();
                            let t_rename = template.clone();
                            let t_remove = template.clone();
                            let old_id = id.clone();
                            let remove_id = id.clone();
                            rsx! {
                                ZoneCard {
                                    key: "{index}-{id}",
                                    zone: zone.clone(),
                                    other_ids: other_ids,
                                    degree: template.degree(&id),
                                    on_change: move |zone: Zone| apply_edit(editor, t_change.with_zone(index, zone)),
                                    on_rename: move |new_id: String| {
                                        apply_result(editor, status, t_rename.rename_zone(&old_id, &new_id))
                                    },
                                    on_remove: move |_| apply_result(editor, status, t_remove.remove_zone(&remove_id)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
