use std::collections::BTreeMap;

use dioxus::prelude::*;
use rmgstudio_core::{ArmyMultipliers, EditorState, Template};
use rmgstudio_ui::{NumberField, Section};

use crate::components::{EditorFrame, Panel};
use crate::context::{apply_edit, use_editor};

/// Creature tiers with their own multiplier
const TIERS: std::ops::RangeInclusive<u8> = 1..=7;

#[component]
pub fn Army() -> Element {
    let editor = use_editor();
    let template = editor.read().document.clone();
    let army = template.army_multipliers.clone();

    let (t, a) = (template.clone(), army.clone());
    let set_neutral = move |neutral: Option<f64>| set_army(editor, &t, ArmyMultipliers { neutral, ..a.clone() });
    let (t, a) = (template.clone(), army.clone());
    let set_guards = move |guards: Option<f64>| set_army(editor, &t, ArmyMultipliers { guards, ..a.clone() });
    let (t, a) = (template.clone(), army.clone());
    let set_growth = move |growth: Option<f64>| set_army(editor, &t, ArmyMultipliers { growth, ..a.clone() });

    rsx! {
        EditorFrame { current: Panel::Army,
            Section { title: "Army multipliers".to_string(), subtitle: "empty means 1.0".to_string(),
                div { class: "card-grid",
                    NumberField { label: "neutral stacks".to_string(), placeholder: "1.0".to_string(), value: army.neutral, on_change: set_neutral }
                    NumberField { label: "guards".to_string(), placeholder: "1.0".to_string(), value: army.guards, on_change: set_guards }
                    NumberField { label: "growth".to_string(), placeholder: "1.0".to_string(), value: army.growth, on_change: set_growth }
                }
            }
            Section { title: "Per tier".to_string(),
                div { class: "card-grid compact",
                    for tier in TIERS {
                        {
                            let (t, a) = (template.clone(), army.clone());
                            rsx! {
                                NumberField {
                                    key: "{tier}",
                                    label: format!("tier {}", tier),
                                    placeholder: "1.0".to_string(),
                                    value: army.by_tier.get(&tier).copied(),
                                    on_change: move |value: Option<f64>| {
                                        let army = ArmyMultipliers {
                                            by_tier: with_tier(&a.by_tier, tier, value),
                                            ..a.clone()
                                        };
                                        set_army(editor, &t, army)
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

fn set_army(editor: Signal<EditorState>, template: &Template, army_multipliers: ArmyMultipliers) {
    apply_edit(
        editor,
        Template {
            army_multipliers,
            ..template.clone()
        },
    )
}

/// Set or clear one tier's multiplier
fn with_tier(by_tier: &BTreeMap<u8, f64>, tier: u8, value: Option<f64>) -> BTreeMap<u8, f64> {
    let mut out = by_tier.clone();
    match value {
        Some(v) => {
            out.insert(tier, v);
        }
        None => {
            out.remove(&tier);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_set_and_clear() {
        let map = with_tier(&BTreeMap::new(), 3, Some(1.5));
        assert_eq!(map.get(&3), Some(&1.5));
        let map = with_tier(&map, 3, None);
        assert!(map.is_empty());
    }
}
