//! Zones and the terrain types they are painted with.

use serde::{Deserialize, Serialize};

/// Terrain type of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Terrain {
    Grass,
    Dirt,
    Sand,
    Snow,
    Swamp,
    Rough,
    Lava,
    Subterranean,
    Highlands,
    Wasteland,
    Water,
}

impl Terrain {
    /// Every terrain, in display order
    pub const ALL: [Terrain; 11] = [
        Terrain::Grass,
        Terrain::Dirt,
        Terrain::Sand,
        Terrain::Snow,
        Terrain::Swamp,
        Terrain::Rough,
        Terrain::Lava,
        Terrain::Subterranean,
        Terrain::Highlands,
        Terrain::Wasteland,
        Terrain::Water,
    ];

    /// Stable key used in the document and in dropdowns
    pub fn key(&self) -> &'static str {
        match self {
            Terrain::Grass => "grass",
            Terrain::Dirt => "dirt",
            Terrain::Sand => "sand",
            Terrain::Snow => "snow",
            Terrain::Swamp => "swamp",
            Terrain::Rough => "rough",
            Terrain::Lava => "lava",
            Terrain::Subterranean => "subterranean",
            Terrain::Highlands => "highlands",
            Terrain::Wasteland => "wasteland",
            Terrain::Water => "water",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Terrain::Grass => "Grass",
            Terrain::Dirt => "Dirt",
            Terrain::Sand => "Sand",
            Terrain::Snow => "Snow",
            Terrain::Swamp => "Swamp",
            Terrain::Rough => "Rough",
            Terrain::Lava => "Lava",
            Terrain::Subterranean => "Subterranean",
            Terrain::Highlands => "Highlands",
            Terrain::Wasteland => "Wasteland",
            Terrain::Water => "Water",
        }
    }

    /// Parse a terrain from its key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Role a zone plays in the generated map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneKind {
    /// Player starting zone
    Start,
    /// Rich zone with high treasure value
    Treasure,
    /// Small pass-through zone between larger ones
    Junction,
    #[default]
    Neutral,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::Start,
        ZoneKind::Treasure,
        ZoneKind::Junction,
        ZoneKind::Neutral,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ZoneKind::Start => "start",
            ZoneKind::Treasure => "treasure",
            ZoneKind::Junction => "junction",
            ZoneKind::Neutral => "neutral",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZoneKind::Start => "Player start",
            ZoneKind::Treasure => "Treasure",
            ZoneKind::Junction => "Junction",
            ZoneKind::Neutral => "Neutral",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Strength of the neutral guards placed in a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuardStrength {
    Weak,
    Average,
    Strong,
    Deadly,
}

impl GuardStrength {
    pub const ALL: [GuardStrength; 4] = [
        GuardStrength::Weak,
        GuardStrength::Average,
        GuardStrength::Strong,
        GuardStrength::Deadly,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GuardStrength::Weak => "weak",
            GuardStrength::Average => "average",
            GuardStrength::Strong => "strong",
            GuardStrength::Deadly => "deadly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuardStrength::Weak => "Weak",
            GuardStrength::Average => "Average",
            GuardStrength::Strong => "Strong",
            GuardStrength::Deadly => "Deadly",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }
}

/// A named region of the generated map
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    /// Unique identifier, referenced by connections, shops and pandora boxes
    pub id: String,
    pub kind: ZoneKind,
    /// Owning player slot (start zones only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
    /// Relative zone size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard_strength: Option<GuardStrength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasure_value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_count: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mines: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_factions: Vec<String>,
}

impl Zone {
    /// Create a neutral zone with the given id and every optional field unset
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
    fn terrain_keys_roundtrip() {
        for terrain in Terrain::ALL {
            assert_eq!(Terrain::from_key(terrain.key()), Some(terrain));
        }
        assert_eq!(Terrain::from_key("lunar"), None);
    }

    #[test]
    fn terrain_serializes_as_key() {
        let json = serde_json::to_string(&Terrain::Subterranean).unwrap();
        assert_eq!(json, "\"subterranean\"");
    }

    #[test]
    fn zone_omits_unset_fields() {
        let zone = Zone::new("z1");
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(json, r#"{"id":"z1","kind":"neutral"}"#);
    }

    #[test]
    fn zone_defaults_missing_fields() {
        let zone: Zone = serde_json::from_str(r#"{"id":"z2","terrain":"lava"}"#).unwrap();
        assert_eq!(zone.id, "z2");
        assert_eq!(zone.kind, ZoneKind::Neutral);
        assert_eq!(zone.terrain, Some(Terrain::Lava));
        assert!(zone.mines.is_empty());
        assert!(zone.owner.is_none());
    }
}
