//! Shops placed on the map.

use serde::{Deserialize, Serialize};

/// What a shop sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShopKind {
    #[default]
    Artifact,
    Spell,
    Creature,
    Resource,
    Trading,
}

impl ShopKind {
    pub const ALL: [ShopKind; 5] = [
        ShopKind::Artifact,
        ShopKind::Spell,
        ShopKind::Creature,
        ShopKind::Resource,
        ShopKind::Trading,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ShopKind::Artifact => "artifact",
            ShopKind::Spell => "spell",
            ShopKind::Creature => "creature",
            ShopKind::Resource => "resource",
            ShopKind::Trading => "trading",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShopKind::Artifact => "Artifact merchant",
            ShopKind::Spell => "Spell shop",
            ShopKind::Creature => "Creature dwelling",
            ShopKind::Resource => "Resource market",
            ShopKind::Trading => "Trading post",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// A shop and the zone it is placed in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shop {
    pub id: String,
    pub kind: ShopKind,
    /// Zone the shop is placed in; unset lets the generator choose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_multiplier: Option<f64>,
    /// Item, spell or creature ids always in stock
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stock: Vec<String>,
}

impl Shop {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
