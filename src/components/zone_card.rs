//! Zone Card
//!
//! Editor for a single zone. The id is edited as a draft and only renamed
//! on commit, since renaming rewrites references across the template.

use dioxus::prelude::*;
use rmgstudio_core::{GuardStrength, Terrain, Zone, ZoneKind};
use rmgstudio_ui::options::{guard_strength_options, optional_key, terrain_options, zone_kind_options};
use rmgstudio_ui::{
    to_u8, Button, ButtonVariant, ChipList, CountField, Select, TextField,
};

#[derive(Props, Clone, PartialEq)]
pub struct ZoneCardProps {
    pub zone: Zone,
    /// Ids of the other zones, for the rename check
    pub other_ids: Vec<String>,
    /// Number of connections touching this zone
    pub degree: usize,
    pub on_change: EventHandler<Zone>,
    /// Called with the new id when a rename is committed
    pub on_rename: EventHandler<String>,
    pub on_remove: EventHandler<()>,
}

#[component]
pub fn ZoneCard(props: ZoneCardProps) -> Element {
    let zone = props.zone.clone();
    let on_change = props.on_change;
    let on_rename = props.on_rename;
    let on_remove = props.on_remove;

    let mut draft_id = use_signal(|| zone.id.clone());
    let draft = draft_id.read().clone();
    let id_invalid = draft.trim().is_empty() || props.other_ids.iter().any(|id| *id == draft.trim());

    let z = zone.clone();
    let set_kind = move |key: String| {
        let kind = ZoneKind::from_key(&key).unwrap_or_default();
        // Only start zones have an owner
        let owner = if kind == ZoneKind::Start { z.owner } else { None };
        on_change.call(Zone { kind, owner, ..z.clone() });
    };
    let z = zone.clone();
    let set_terrain = move |key: String| {
        on_change.call(Zone {
            terrain: Terrain::from_key(&key),
            ..z.clone()
        })
    };
    let z = zone.clone();
    let set_guard = move |key: String| {
        on_change.call(Zone {
            guard_strength: GuardStrength::from_key(&key),
            ..z.clone()
        })
    };
    let z = zone.clone();
    let set_owner = move |owner: Option<u32>| on_change.call(Zone { owner: to_u8(owner), ..z.clone() });
    let z = zone.clone();
    let set_size = move |size: Option<u32>| on_change.call(Zone { size, ..z.clone() });
    let z = zone.clone();
    let set_treasure = move |treasure_value: Option<u32>| {
        on_change.call(Zone {
            treasure_value,
            ..z.clone()
        })
    };
    let z = zone.clone();
    let set_towns = move |towns: Option<u32>| {
        on_change.call(Zone {
            town_count: to_u8(towns),
            ..z.clone()
        })
    };
    let z = zone.clone();
    let set_mines = move |mines: Vec<String>| on_change.call(Zone { mines, ..z.clone() });
    let z = zone.clone();
    let set_factions = move |allowed_factions: Vec<String>| {
        on_change.call(Zone {
            allowed_factions,
            ..z.clone()
        })
    };

    let current_id = zone.id.clone();
    let kind_label = zone.kind.label();
    let card_class = if zone.kind == ZoneKind::Start {
        "editor-card zone-card start"
    } else {
        "editor-card zone-card"
    };

    rsx! {
        article { class: "{card_class}",
            header { class: "card-header",
                span { class: "card-title", "{props.zone.id}" }
                span { class: "card-meta", "{kind_label} · {props.degree} links" }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_remove.call(()),
                    title: "Remove zone and its connections".to_string(),
                    "Remove"
                }
            }
            div { class: "card-grid",
                TextField {
                    label: "id".to_string(),
                    hint: "unique".to_string(),
                    value: draft,
                    invalid: id_invalid,
                    on_change: move |text: String| draft_id.set(text),
                    on_commit: move |text: String| {
                        if text.trim() != current_id {
                            on_rename.call(text.trim().to_string());
                        }
                    },
                }
                Select {
                    label: "kind".to_string(),
                    options: zone_kind_options(),
                    selected: props.zone.kind.key().to_string(),
                    on_change: set_kind,
                }
                if props.zone.kind == ZoneKind::Start {
                    CountField {
                        label: "owner".to_string(),
                        hint: "player slot".to_string(),
                        value: props.zone.owner.map(u32::from),
                        on_change: set_owner,
                    }
                }
                Select {
                    label: "terrain".to_string(),
                    options: terrain_options(),
                    selected: optional_key(props.zone.terrain, Terrain::key),
                    empty_label: "any".to_string(),
                    on_change: set_terrain,
                }
                CountField { label: "size".to_string(), value: props.zone.size, on_change: set_size }
                Select {
                    label: "guards".to_string(),
                    options: guard_strength_options(),
                    selected: optional_key(props.zone.guard_strength, GuardStrength::key),
                    empty_label: "default".to_string(),
                    on_change: set_guard,
                }
                CountField {
                    label: "treasure value".to_string(),
                    value: props.zone.treasure_value,
                    on_change: set_treasure,
                }
                CountField {
                    label: "towns".to_string(),
                    value: props.zone.town_count.map(u32::from),
                    on_change: set_towns,
                }
            }
            ChipList { label: "mines".to_string(), items: props.zone.mines.clone(), on_change: set_mines }
            ChipList {
                label: "allowed factions".to_string(),
                items: props.zone.allowed_factions.clone(),
                on_change: set_factions,
            }
        }
    }
}
