use dioxus::prelude::*;
use rmgstudio_core::{Terrain, TerrainRule};
use rmgstudio_ui::{Button, ButtonVariant, Checkbox, CountField, EmptyHint, Section};

use crate::components::{EditorFrame, Panel};
use crate::context::{apply_edit, use_editor};

#[component]
pub fn Terrains() -> Element {
    let editor = use_editor();
    let template = editor.read().document.clone();
    let missing = Terrain::ALL.len().saturating_sub(template.terrains.len());
    let enabled = template.terrains.iter().filter(|r| r.enabled).count();

    let t = template.clone();
    let fill_rules = move |_| apply_edit(editor, t.ensure_terrain_rules());

    rsx! {
        EditorFrame { current: Panel::Terrains,
            Section { title: "Terrains".to_string(), subtitle: format!("{} enabled", enabled),
                if missing > 0 {
                    div { class: "section-toolbar",
                        Button {
                            variant: ButtonVariant::Badge,
                            onclick: fill_rules,
                            title: "Add a rule for every terrain without one".to_string(),
                            "+ add missing terrains"
                        }
                    }
                }
                if template.terrains.is_empty() {
                    EmptyHint { text: "No terrain rules. Every terrain is allowed with default weight.".to_string() }
                }
                div { class: "row-list",
                    for (index, rule) in template.terrains.iter().enumerate() {
                        {
                            let t_enabled = template.clone();
                            let t_weight = template.clone();
                            let r_enabled = rule.clone();
                            let r_weight = rule.clone();
                            rsx! {
                                div { key: "{index}", class: "editor-row terrain-row",
                                    span { class: "terrain-swatch terrain-{rule.terrain.key()}" }
                                    span { class: "row-label", "{rule.terrain.label()}" }
                                    Checkbox {
                                        label: "enabled".to_string(),
                                        checked: rule.enabled,
                                        on_change: move |enabled: bool| {
                                            let rule = TerrainRule { enabled, ..r_enabled.clone() };
                                            apply_edit(editor, t_enabled.with_terrain_rule(index, rule))
                                        },
                                    }
                                    CountField {
                                        label: "weight".to_string(),
                                        value: rule.weight,
                                        on_change: move |weight: Option<u32>| {
                                            let rule = TerrainRule { weight, ..r_weight.clone() };
                                            apply_edit(editor, t_weight.with_terrain_rule(index, rule))
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
