//! Links between zones.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A directed or bidirectional link between two zones
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    /// Source zone id
    pub from: String,
    /// Target zone id
    pub to: String,
    /// Passable in both directions
    #[serde(skip_serializing_if = "is_false")]
    pub two_way: bool,
    /// A monster guard blocks the passage
    #[serde(skip_serializing_if = "is_false")]
    pub guarded: bool,
    /// Total guard value when guarded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard_value: Option<u32>,
    /// Part of the main route between players
    #[serde(skip_serializing_if = "is_false")]
    pub main: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<bool>,
}

impl Connection {
    /// Create an unguarded one-way secondary connection
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    /// Whether this connection touches the given zone
    pub fn touches(&self, zone_id: &str) -> bool {
        self.from == zone_id || self.to == zone_id
    }

    /// Short label such as `a -> b` or `a <-> b`
    pub fn label(&self) -> String {
        let arrow = if self.two_way { "<->" } else { "->" };
        format!("{} {} {}", self.from, arrow, self.to)
    }
}
