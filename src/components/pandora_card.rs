//! Pandora Box Card
//!
//! Placement plus the full reward editor: gold, experience, artifact and
//! spell lists, creature stacks and resources.

use dioxus::prelude::*;
use rmgstudio_core::edit::{remove_at, replace_at};
use rmgstudio_core::{CreatureStack, PandoraBox, PandoraReward, Resources};
use rmgstudio_ui::options::zone_options;
use rmgstudio_ui::{
    Button, ButtonVariant, Checkbox, ChipList, CountField, IconButton, OptionalTextField, Select,
    TextField,
};

#[derive(Props, Clone, PartialEq)]
pub struct PandoraCardProps {
    pub pandora: PandoraBox,
    pub zone_ids: Vec<String>,
    pub on_change: EventHandler<PandoraBox>,
    pub on_remove: EventHandler<()>,
}

#[component]
pub fn PandoraCard(props: PandoraCardProps) -> Element {
    let pandora = props.pandora.clone();
    let on_change = props.on_change;
    let on_remove = props.on_remove;

    let title = pandora.name.clone().unwrap_or_else(|| pandora.id.clone());
    let summary = pandora.reward.summary();

    let p = pandora.clone();
    let set_id = move |id: String| on_change.call(PandoraBox { id, ..p.clone() });
    let p = pandora.clone();
    let set_name = move |name: Option<String>| on_change.call(PandoraBox { name, ..p.clone() });
    let p = pandora.clone();
    let set_zone = move |zone: String| {
        let zone = if zone.is_empty() { None } else { Some(zone) };
        on_change.call(PandoraBox { zone, ..p.clone() })
    };
    let p = pandora.clone();
    let set_guarded = move |guarded: bool| on_change.call(PandoraBox { guarded, ..p.clone() });
    let p = pandora.clone();
    let set_reward = move |reward: PandoraReward| on_change.call(PandoraBox { reward, ..p.clone() });

    rsx! {
        article { class: "editor-card pandora-card",
            header { class: "card-header",
                span { class: "card-title", "{title}" }
                span { class: "card-meta", "{summary}" }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_remove.call(()),
                    "Remove"
                }
            }
            div { class: "card-grid",
                TextField { label: "id".to_string(), value: pandora.id.clone(), on_change: set_id }
                OptionalTextField { label: "name".to_string(), value: pandora.name.clone(), on_change: set_name }
                Select {
                    label: "zone".to_string(),
                    options: zone_options(props.zone_ids.iter().map(String::as_str)),
                    selected: pandora.zone.clone().unwrap_or_default(),
                    empty_label: "any zone".to_string(),
                    on_change: set_zone,
                }
                Checkbox { label: "guarded".to_string(), checked: pandora.guarded, on_change: set_guarded }
            }
            RewardEditor { reward: pandora.reward.clone(), on_change: set_reward }
        }
    }
}

#[component]
fn RewardEditor(reward: PandoraReward, on_change: EventHandler<PandoraReward>) -> Element {
    let r = reward.clone();
    let set_gold = move |gold: Option<u32>| on_change.call(PandoraReward { gold, ..r.clone() });
    let r = reward.clone();
    let set_exp = move |experience: Option<u32>| {
        on_change.call(PandoraReward {
            experience,
            ..r.clone()
        })
    };
    let r = reward.clone();
    let set_artifacts = move |artifacts: Vec<String>| {
        on_change.call(PandoraReward {
            artifacts,
            ..r.clone()
        })
    };
    let r = reward.clone();
    let set_spells = move |spells: Vec<String>| on_change.call(PandoraReward { spells, ..r.clone() });
    let r = reward.clone();
    let set_creatures = move |creatures: Vec<CreatureStack>| {
        on_change.call(PandoraReward {
            creatures,
            ..r.clone()
        })
    };
    let r = reward.clone();
    let set_resources = move |resources: Resources| {
        on_change.call(PandoraReward {
            resources,
            ..r.clone()
        })
    };

    rsx! {
        div { class: "reward-editor",
            h3 { class: "subsection-title", "Reward" }
            div { class: "card-grid",
                CountField { label: "gold".to_string(), value: reward.gold, on_change: set_gold }
                CountField { label: "experience".to_string(), value: reward.experience, on_change: set_exp }
            }
            ChipList { label: "artifacts".to_string(), items: reward.artifacts.clone(), on_change: set_artifacts }
            ChipList { label: "spells".to_string(), items: reward.spells.clone(), on_change: set_spells }
            CreatureStacks { stacks: reward.creatures.clone(), on_change: set_creatures }
            ResourceEditor { resources: reward.resources.clone(), on_change: set_resources }
        }
    }
}

#[component]
fn CreatureStacks(stacks: Vec<CreatureStack>, on_change: EventHandler<Vec<CreatureStack>>) -> Element {
    let for_add = stacks.clone();

    rsx! {
        div { class: "creature-stacks",
            span { class: "input-label", "creatures" }
            for (i, stack) in stacks.iter().enumerate() {
                {
                    let all = stacks.clone();
                    let all_count = stacks.clone();
                    let all_remove = stacks.clone();
                    let s = stack.clone();
                    let s_count = stack.clone();
                    rsx! {
                        div { key: "{i}", class: "creature-stack",
                            TextField {
                                value: stack.creature.clone(),
                                placeholder: "creature".to_string(),
                                on_change: move |creature: String| {
                                    on_change.call(replace_at(&all, i, CreatureStack { creature, ..s.clone() }))
                                },
                            }
                            CountField {
                                value: Some(stack.count),
                                placeholder: "count".to_string(),
                                on_change: move |count: Option<u32>| {
                                    let stack = CreatureStack { count: count.unwrap_or(0), ..s_count.clone() };
                                    on_change.call(replace_at(&all_count, i, stack))
                                },
                            }
                            IconButton {
                                aria_label: "Remove creature stack".to_string(),
                                onclick: move |_| on_change.call(remove_at(&all_remove, i)),
                                "×"
                            }
                        }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Badge,
                onclick: move |_| {
                    let mut next = for_add.clone();
                    next.push(CreatureStack { creature: String::new(), count: 1 });
                    on_change.call(next);
                },
                "+ creature stack"
            }
        }
    }
}

#[component]
fn ResourceEditor(resources: Resources, on_change: EventHandler<Resources>) -> Element {
    let fields: [(&str, Option<u32>, fn(&Resources, Option<u32>) -> Resources); 6] = [
        ("wood", resources.wood, |r, wood| Resources { wood, ..r.clone() }),
        ("ore", resources.ore, |r, ore| Resources { ore, ..r.clone() }),
        ("mercury", resources.mercury, |r, mercury| Resources { mercury, ..r.clone() }),
        ("sulfur", resources.sulfur, |r, sulfur| Resources { sulfur, ..r.clone() }),
        ("crystal", resources.crystal, |r, crystal| Resources { crystal, ..r.clone() }),
        ("gems", resources.gems, |r, gems| Resources { gems, ..r.clone() }),
    ];

    rsx! {
        div { class: "resource-editor",
            span { class: "input-label", "resources" }
            div { class: "card-grid compact",
                for (name, value, set) in fields {
                    {
                        let current = resources.clone();
                        rsx! {
                            CountField {
                                key: "{name}",
                                label: name.to_string(),
                                value: value,
                                on_change: move |amount: Option<u32>| on_change.call(set(&current, amount)),
                            }
                        }
                    }
                }
            }
        }
    }
}
