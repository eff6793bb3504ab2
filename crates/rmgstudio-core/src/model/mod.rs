//! Template generation config data model.
//!
//! The document is a deeply nested tree of mostly optional fields. Values
//! are treated as immutable by the editor: every edit produces a new
//! [`Template`] with one field changed (see [`crate::edit`]).

mod connection;
mod pandora;
mod rules;
mod shop;
mod zone;

pub use connection::Connection;
pub use pandora::{CreatureStack, PandoraBox, PandoraReward, Resources};
pub use rules::{ArmyMultipliers, BanLists, ScriptedFeatures, TerrainRule};
pub use shop::{Shop, ShopKind};
pub use zone::{GuardStrength, Terrain, Zone, ZoneKind};

use serde::{Deserialize, Serialize};

/// Overall map size the template targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MapSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Giant,
}

impl MapSize {
    pub const ALL: [MapSize; 5] = [
        MapSize::Small,
        MapSize::Medium,
        MapSize::Large,
        MapSize::ExtraLarge,
        MapSize::Giant,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MapSize::Small => "small",
            MapSize::Medium => "medium",
            MapSize::Large => "large",
            MapSize::ExtraLarge => "extraLarge",
            MapSize::Giant => "giant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapSize::Small => "Small (72)",
            MapSize::Medium => "Medium (108)",
            MapSize::Large => "Large (144)",
            MapSize::ExtraLarge => "Extra large (180)",
            MapSize::Giant => "Giant (252)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

/// Root of a template generation config document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_size: Option<MapSize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<Zone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<Connection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shops: Vec<Shop>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terrains: Vec<TerrainRule>,
    #[serde(skip_serializing_if = "ArmyMultipliers::is_empty")]
    pub army_multipliers: ArmyMultipliers,
    #[serde(skip_serializing_if = "ScriptedFeatures::is_empty")]
    pub scripted_features: ScriptedFeatures,
    #[serde(skip_serializing_if = "BanLists::is_empty")]
    pub bans: BanLists,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pandora_boxes: Vec<PandoraBox>,
}

impl Template {
    /// Create an empty template with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Starter template: `zone_count` zones joined in a ring, the first two
    /// being player starts connected by main routes.
    pub fn starter(name: impl Into<String>, zone_count: usize) -> Self {
        let mut template = Self::new(name);
        for i in 0..zone_count {
            let mut zone = Zone::new(format!("zone-{}", i + 1));
            if i < 2 {
                zone.kind = ZoneKind::Start;
                zone.owner = Some(i as u8 + 1);
            }
            template.zones.push(zone);
        }
        if zone_count > 1 {
            for i in 0..zone_count {
                let next = (i + 1) % zone_count;
                if zone_count == 2 && i == 1 {
                    break;
                }
                let mut conn = Connection::new(
                    template.zones[i].id.clone(),
                    template.zones[next].id.clone(),
                );
                conn.two_way = true;
                conn.main = i == 0;
                template.connections.push(conn);
            }
        }
        template.min_players = Some(2);
        template.max_players = Some(2);
        template
    }

    /// Zone ids in declaration order
    pub fn zone_ids(&self) -> Vec<String> {
        self.zones.iter().map(|z| z.id.clone()).collect()
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn has_zone(&self, id: &str) -> bool {
        self.zone(id).is_some()
    }

    /// Number of connections touching a zone
    pub fn degree(&self, zone_id: &str) -> usize {
        self.connections.iter().filter(|c| c.touches(zone_id)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_template_serializes_to_name_only() {
        let json = serde_json::to_string(&Template::new("Jebus")).unwrap();
        assert_eq!(json, r#"{"name":"Jebus"}"#);
    }

    #[test]
    fn starter_builds_ring() {
        let t = Template::starter("Ring", 4);
        assert_eq!(t.zones.len(), 4);
        assert_eq!(t.connections.len(), 4);
        assert_eq!(t.zones[0].kind, ZoneKind::Start);
        assert_eq!(t.zones[2].kind, ZoneKind::Neutral);
        assert!(t.connections[0].main);
        assert_eq!(t.connections[3].from, "zone-4");
        assert_eq!(t.connections[3].to, "zone-1");
    }

    #[test]
    fn starter_with_two_zones_has_one_link() {
        let t = Template::starter("Duel", 2);
        assert_eq!(t.connections.len(), 1);
        assert_eq!(t.connections[0].label(), "zone-1 <-> zone-2");
    }

    #[test]
    fn starter_with_single_zone_has_no_links() {
        let t = Template::starter("Solo", 1);
        assert_eq!(t.zones.len(), 1);
        assert!(t.connections.is_empty());
    }

    #[test]
    fn degree_counts_both_ends() {
        let t = Template::starter("Ring", 3);
        assert_eq!(t.degree("zone-1"), 2);
        assert_eq!(t.degree("missing"), 0);
    }

    #[test]
    fn map_size_keys_roundtrip() {
        for size in MapSize::ALL {
            assert_eq!(MapSize::from_key(size.key()), Some(size));
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.key()));
        }
    }
}
