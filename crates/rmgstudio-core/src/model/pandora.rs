//! Pandora box reward configurations.

use serde::{Deserialize, Serialize};

/// Resource amounts; unset entries grant nothing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wood: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ore: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mercury: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sulfur: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crystal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gems: Option<u32>,
}

impl Resources {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Sum of all set amounts
    pub fn total(&self) -> u64 {
        [
            self.wood,
            self.ore,
            self.mercury,
            self.sulfur,
            self.crystal,
            self.gems,
        ]
        .into_iter()
        .flatten()
        .map(u64::from)
        .sum()
    }
}

/// A stack of creatures granted by a box
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatureStack {
    pub creature: String,
    pub count: u32,
}

/// Everything a pandora box hands out when opened
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PandoraReward {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spells: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub creatures: Vec<CreatureStack>,
    #[serde(skip_serializing_if = "Resources::is_empty")]
    pub resources: Resources,
}

impl PandoraReward {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// One-line summary for list views, e.g. `5000 gold, 2 artifacts`
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(gold) = self.gold {
            parts.push(format!("{} gold", gold));
        }
        if let Some(exp) = self.experience {
            parts.push(format!("{} exp", exp));
        }
        if !self.artifacts.is_empty() {
            parts.push(format!("{} artifacts", self.artifacts.len()));
        }
        if !self.spells.is_empty() {
            parts.push(format!("{} spells", self.spells.len()));
        }
        if !self.creatures.is_empty() {
            parts.push(format!("{} creature stacks", self.creatures.len()));
        }
        if !self.resources.is_empty() {
            parts.push(format!("{} resources", self.resources.total()));
        }
        if parts.is_empty() {
            "empty".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// A pandora box placement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PandoraBox {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub guarded: bool,
    #[serde(skip_serializing_if = "PandoraReward::is_empty")]
    pub reward: PandoraReward,
}

impl PandoraBox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reward_summary() {
        assert_eq!(PandoraReward::default().summary(), "empty");
    }

    #[test]
    fn reward_summary_lists_parts() {
        let reward = PandoraReward {
            gold: Some(5000),
            artifacts: vec!["ring".into(), "sword".into()],
            resources: Resources {
                wood: Some(10),
                gems: Some(5),
                ..Resources::default()
            },
            ..PandoraReward::default()
        };
        assert_eq!(reward.summary(), "5000 gold, 2 artifacts, 15 resources");
    }

    #[test]
    fn empty_reward_is_omitted() {
        let json = serde_json::to_string(&PandoraBox::new("box-1")).unwrap();
        assert_eq!(json, r#"{"id":"box-1"}"#);
    }
}
