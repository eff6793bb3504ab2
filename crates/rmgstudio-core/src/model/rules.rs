//! Template-wide generation rules: terrains, army multipliers, scripted
//! features and ban lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::zone::Terrain;

/// Whether a terrain may be used and how often
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainRule {
    pub terrain: Terrain,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

fn enabled_default() -> bool {
    true
}

impl TerrainRule {
    pub fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            enabled: true,
            weight: None,
        }
    }
}

/// Army size multipliers; unset means the game default of 1.0
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArmyMultipliers {
    /// Neutral wandering stacks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
    /// Connection and object guards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guards: Option<f64>,
    /// Weekly creature growth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<f64>,
    /// Per creature tier (1..=7)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub by_tier: BTreeMap<u8, f64>,
}

impl ArmyMultipliers {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Every set multiplier with a display name, used by validation
    pub fn entries(&self) -> Vec<(String, f64)> {
        let mut out = Vec::new();
        if let Some(v) = self.neutral {
            out.push(("neutral".to_string(), v));
        }
        if let Some(v) = self.guards {
            out.push(("guards".to_string(), v));
        }
        if let Some(v) = self.growth {
            out.push(("growth".to_string(), v));
        }
        for (tier, v) in &self.by_tier {
            out.push((format!("tier {}", tier), *v));
        }
        out
    }
}

/// Scripted rule toggles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptedFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fog_of_war: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_all_towns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_underground: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_teleport_between_zones: Option<bool>,
    /// Game ends after this many days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_limit: Option<u32>,
    /// Toggles the editor has no dedicated field for
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, bool>,
}

impl ScriptedFeatures {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Number of toggles explicitly switched on
    pub fn enabled_count(&self) -> usize {
        [
            self.fog_of_war,
            self.capture_all_towns,
            self.disable_underground,
            self.allow_teleport_between_zones,
        ]
        .into_iter()
        .filter(|v| *v == Some(true))
        .count()
            + self.custom.values().filter(|v| **v).count()
    }
}

/// Content banned from the generated map
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BanLists {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spells: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub creatures: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub heroes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

impl BanLists {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn total(&self) -> usize {
        self.artifacts.len()
            + self.spells.len()
            + self.creatures.len()
            + self.heroes.len()
            + self.skills.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_rule_enabled_by_default() {
        let rule: TerrainRule = serde_json::from_str(r#"{"terrain":"snow"}"#).unwrap();
        assert!(rule.enabled);
        assert_eq!(rule.terrain, Terrain::Snow);
    }

    #[test]
    fn multiplier_entries_include_tiers() {
        let mut army = ArmyMultipliers {
            guards: Some(1.5),
            ..ArmyMultipliers::default()
        };
        army.by_tier.insert(7, 0.5);
        let entries = army.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], ("tier 7".to_string(), 0.5));
    }

    #[test]
    fn enabled_count_ignores_unset_and_false() {
        let mut features = ScriptedFeatures {
            fog_of_war: Some(true),
            capture_all_towns: Some(false),
            ..ScriptedFeatures::default()
        };
        features.custom.insert("noRetreat".into(), true);
        features.custom.insert("noSurrender".into(), false);
        assert_eq!(features.enabled_count(), 2);
    }
}
