//! Option lists for the model's enums, ready for [`Select`](crate::Select).

use rmgstudio_core::{GuardStrength, MapSize, ShopKind, Terrain, ZoneKind};

use crate::components::SelectOption;

pub fn terrain_options() -> Vec<SelectOption> {
    Terrain::ALL
        .iter()
        .map(|t| SelectOption::new(t.key(), t.label()))
        .collect()
}

pub fn zone_kind_options() -> Vec<SelectOption> {
    ZoneKind::ALL
        .iter()
        .map(|k| SelectOption::new(k.key(), k.label()))
        .collect()
}

pub fn guard_strength_options() -> Vec<SelectOption> {
    GuardStrength::ALL
        .iter()
        .map(|g| SelectOption::new(g.key(), g.label()))
        .collect()
}

pub fn map_size_options() -> Vec<SelectOption> {
    MapSize::ALL
        .iter()
        .map(|m| SelectOption::new(m.key(), m.label()))
        .collect()
}

pub fn shop_kind_options() -> Vec<SelectOption> {
    ShopKind::ALL
        .iter()
        .map(|k| SelectOption::new(k.key(), k.label()))
        .collect()
}

/// One entry per zone id, labelled by the id itself
pub fn zone_options<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SelectOption> {
    ids.into_iter().map(|id| SelectOption::new(id, id)).collect()
}

/// Select value for an optional enum: its key, or "" when unset
pub fn optional_key<T>(value: Option<T>, key: impl Fn(&T) -> &'static str) -> String {
    value.as_ref().map(key).unwrap_or_default().to_string()
}
