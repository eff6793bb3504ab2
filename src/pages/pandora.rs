use dioxus::prelude::*;
use rmgstudio_core::PandoraBox;
use rmgstudio_ui::{Button, ButtonVariant, EmptyHint, Section};

use crate::components::{EditorFrame, PandoraCard, Panel};
use crate::context::{apply_edit, apply_result, use_editor, use_status};

#[component]
pub fn Pandora() -> Element {
    let editor = use_editor();
    let status = use_status();
    let template = editor.read().document.clone();
    let ids = template.zone_ids();

    let t = template.clone();
    let add_box = move |_| apply_edit(editor, t.add_pandora_box());

    rsx! {
        EditorFrame { current: Panel::Pandora,
            Section { title: "Pandora boxes".to_string(), subtitle: format!("{}", template.pandora_boxes.len()),
                div { class: "section-toolbar",
                    Button { variant: ButtonVariant::Badge, onclick: add_box, "+ add pandora box" }
                }
                if template.pandora_boxes.is_empty() {
                    EmptyHint { text: "No pandora boxes.".to_string() }
                }
                div { class: "card-list",
                    for (index, pandora) in template.pandora_boxes.iter().enumerate() {
                        {
                            let t_change = template.clone();
                            let t_remove = template.clone();
                            rsx! {
                                PandoraCard {
                                    key: "{index}",
                                    pandora: pandora.clone(),
                                    zone_ids: ids.clone(),
                                    on_change: move |b: PandoraBox| apply_edit(editor, t_change.with_pandora_box(index, b)),
                                    on_remove: move |_| apply_result(editor, status, t_remove.remove_pandora_box(index)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
