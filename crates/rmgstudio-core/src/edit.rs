//! Copy-on-write edit operations.
//!
//! Every operation takes `&self` and returns a new value with a single
//! change applied. The editor swaps the whole document on each edit, which
//! keeps undo/redo a matter of storing snapshots.

use crate::error::{StudioError, StudioResult};
use crate::model::{Connection, PandoraBox, Shop, Template, Terrain, TerrainRule, Zone};

/// Return a copy of `items` with `items[index]` replaced.
///
/// Out-of-range indices leave the list unchanged.
pub fn replace_at<T: Clone>(items: &[T], index: usize, value: T) -> Vec<T> {
    let mut out = items.to_vec();
    if let Some(slot) = out.get_mut(index) {
        *slot = value;
    }
    out
}

/// Return a copy of `items` without `items[index]`.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if index < out.len() {
        out.remove(index);
    }
    out
}

/// Append a chip to a string list. The value is trimmed; empty values and
/// values already present are ignored.
pub fn add_chip(chips: &[String], value: &str) -> Vec<String> {
    let value = value.trim();
    let mut out = chips.to_vec();
    if !value.is_empty() && !out.iter().any(|c| c == value) {
        out.push(value.to_string());
    }
    out
}

/// Remove every occurrence of a chip from a string list
pub fn remove_chip(chips: &[String], value: &str) -> Vec<String> {
    chips.iter().filter(|c| *c != value).cloned().collect()
}

/// First id of the form `{prefix}-N` not present in `taken`
pub fn next_free_id<'a>(prefix: &str, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut n = 1usize;
    loop {
        let candidate = format!("{}-{}", prefix, n);
        if !taken.clone().any(|id| id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn check_index(what: &'static str, index: usize, len: usize) -> StudioResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(StudioError::IndexOutOfRange { what, index, len })
    }
}

impl Template {
    // === Zones ===

    pub fn with_zone(&self, index: usize, zone: Zone) -> Template {
        Template {
            zones: replace_at(&self.zones, index, zone),
            ..self.clone()
        }
    }

    /// Append a neutral zone with a fresh `zone-N` id
    pub fn add_zone(&self) -> Template {
        let id = next_free_id("zone", self.zones.iter().map(|z| z.id.as_str()));
        let mut zones = self.zones.clone();
        zones.push(Zone::new(id));
        Template {
            zones,
            ..self.clone()
        }
    }

    /// Remove a zone together with every connection touching it
    pub fn remove_zone(&self, id: &str) -> StudioResult<Template> {
        if !self.has_zone(id) {
            return Err(StudioError::ZoneNotFound(id.to_string()));
        }
        tracing::debug!(zone = id, "removing zone and its connections");
        Ok(Template {
            zones: self.zones.iter().filter(|z| z.id != id).cloned().collect(),
            connections: self
                .connections
                .iter()
                .filter(|c| !c.touches(id))
                .cloned()
                .collect(),
            ..self.clone()
        })
    }

    /// Rename a zone and rewrite every reference to it
    pub fn rename_zone(&self, old: &str, new: &str) -> StudioResult<Template> {
        let new = new.trim();
        if new.is_empty() {
            return Err(StudioError::InvalidZoneId("id must not be empty".to_string()));
        }
        if !self.has_zone(old) {
            return Err(StudioError::ZoneNotFound(old.to_string()));
        }
        if old == new {
            return Ok(self.clone());
        }
        if self.has_zone(new) {
            return Err(StudioError::InvalidZoneId(format!("'{}' is already taken", new)));
        }

        let rewrite = |s: &String| if s == old { new.to_string() } else { s.clone() };
        let rewrite_opt = |s: &Option<String>| s.as_ref().map(rewrite);

        Ok(Template {
            zones: self
                .zones
                .iter()
                .map(|z| Zone {
                    id: rewrite(&z.id),
                    ..z.clone()
                })
                .collect(),
            connections: self
                .connections
                .iter()
                .map(|c| Connection {
                    from: rewrite(&c.from),
                    to: rewrite(&c.to),
                    ..c.clone()
                })
                .collect(),
            shops: self
                .shops
                .iter()
                .map(|s| Shop {
                    zone: rewrite_opt(&s.zone),
                    ..s.clone()
                })
                .collect(),
            pandora_boxes: self
                .pandora_boxes
                .iter()
                .map(|b| PandoraBox {
                    zone: rewrite_opt(&b.zone),
                    ..b.clone()
                })
                .collect(),
            ..self.clone()
        })
    }

    // === Connections ===

    pub fn with_connection(&self, index: usize, connection: Connection) -> Template {
        Template {
            connections: replace_at(&self.connections, index, connection),
            ..self.clone()
        }
    }

    pub fn add_connection(&self, from: &str, to: &str) -> Template {
        let mut connections = self.connections.clone();
        connections.push(Connection::new(from, to));
        Template {
            connections,
            ..self.clone()
        }
    }

    pub fn remove_connection(&self, index: usize) -> StudioResult<Template> {
        check_index("connections", index, self.connections.len())?;
        Ok(Template {
            connections: remove_at(&self.connections, index),
            ..self.clone()
        })
    }

    // === Shops ===

    pub fn with_shop(&self, index: usize, shop: Shop) -> Template {
        Template {
            shops: replace_at(&self.shops, index, shop),
            ..self.clone()
        }
    }

    pub fn add_shop(&self) -> Template {
        let id = next_free_id("shop", self.shops.iter().map(|s| s.id.as_str()));
        let mut shops = self.shops.clone();
        shops.push(Shop::new(id));
        Template {
            shops,
            ..self.clone()
        }
    }

    pub fn remove_shop(&self, index: usize) -> StudioResult<Template> {
        check_index("shops", index, self.shops.len())?;
        Ok(Template {
            shops: remove_at(&self.shops, index),
            ..self.clone()
        })
    }

    // === Pandora boxes ===

    pub fn with_pandora_box(&self, index: usize, pandora: PandoraBox) -> Template {
        Template {
            pandora_boxes: replace_at(&self.pandora_boxes, index, pandora),
            ..self.clone()
        }
    }

    pub fn add_pandora_box(&self) -> Template {
        let id = next_free_id("pandora", self.pandora_boxes.iter().map(|b| b.id.as_str()));
        let mut pandora_boxes = self.pandora_boxes.clone();
        pandora_boxes.push(PandoraBox::new(id));
        Template {
            pandora_boxes,
            ..self.clone()
        }
    }

    pub fn remove_pandora_box(&self, index: usize) -> StudioResult<Template> {
        check_index("pandora boxes", index, self.pandora_boxes.len())?;
        Ok(Template {
            pandora_boxes: remove_at(&self.pandora_boxes, index),
            ..self.clone()
        })
    }

    // === Terrains ===

    pub fn with_terrain_rule(&self, index: usize, rule: TerrainRule) -> Template {
        Template {
            terrains: replace_at(&self.terrains, index, rule),
            ..self.clone()
        }
    }

    /// Make sure every terrain has exactly one rule; existing rules keep
    /// their settings and new ones are appended in [`Terrain::ALL`] order.
    pub fn ensure_terrain_rules(&self) -> Template {
        let mut terrains: Vec<TerrainRule> = Vec::with_capacity(Terrain::ALL.len());
        for rule in &self.terrains {
            if !terrains.iter().any(|r| r.terrain == rule.terrain) {
                terrains.push(rule.clone());
            }
        }
        for terrain in Terrain::ALL {
            if !terrains.iter().any(|r| r.terrain == terrain) {
                terrains.push(TerrainRule::new(terrain));
            }
        }
        Template {
            terrains,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Template {
        let mut t = Template::starter("Sample", 3);
        let mut shop = Shop::new("shop-1");
        shop.zone = Some("zone-2".into());
        t.shops.push(shop);
        let mut pandora = PandoraBox::new("pandora-1");
        pandora.zone = Some("zone-2".into());
        t.pandora_boxes.push(pandora);
        t
    }

    #[test]
    fn replace_at_ignores_out_of_range() {
        let items = vec![1, 2, 3];
        assert_eq!(replace_at(&items, 1, 9), vec![1, 9, 3]);
        assert_eq!(replace_at(&items, 7, 9), items);
    }

    #[test]
    fn chips_are_trimmed_and_deduplicated() {
        let chips = add_chip(&[], "  angel  ");
        assert_eq!(chips, vec!["angel".to_string()]);
        let chips = add_chip(&chips, "angel");
        assert_eq!(chips.len(), 1);
        let chips = add_chip(&chips, "   ");
        assert_eq!(chips.len(), 1);
        assert!(remove_chip(&chips, "angel").is_empty());
    }

    #[test]
    fn next_free_id_skips_taken() {
        let taken = ["zone-1", "zone-2", "zone-4"];
        assert_eq!(next_free_id("zone", taken.iter().copied()), "zone-3");
    }

    #[test]
    fn edits_leave_original_untouched() {
        let original = sample();
        let edited = original.add_zone();
        assert_eq!(original.zones.len(), 3);
        assert_eq!(edited.zones.len(), 4);
        assert_eq!(edited.zones[3].id, "zone-4");
    }

    #[test]
    fn remove_zone_drops_its_connections() {
        let t = sample().remove_zone("zone-2").unwrap();
        assert_eq!(t.zones.len(), 2);
        assert!(t.connections.iter().all(|c| !c.touches("zone-2")));
        assert_eq!(t.connections.len(), 1);
    }

    #[test]
    fn remove_missing_zone_fails() {
        let err = sample().remove_zone("nope").unwrap_err();
        assert!(matches!(err, StudioError::ZoneNotFound(_)));
    }

    #[test]
    fn rename_zone_rewrites_references() {
        let t = sample().rename_zone("zone-2", "mid").unwrap();
        assert!(t.has_zone("mid"));
        assert!(!t.has_zone("zone-2"));
        assert_eq!(t.connections[0].to, "mid");
        assert_eq!(t.connections[1].from, "mid");
        assert_eq!(t.shops[0].zone.as_deref(), Some("mid"));
        assert_eq!(t.pandora_boxes[0].zone.as_deref(), Some("mid"));
    }

    #[test]
    fn rename_zone_rejects_taken_and_empty() {
        let t = sample();
        assert!(matches!(
            t.rename_zone("zone-1", "zone-2"),
            Err(StudioError::InvalidZoneId(_))
        ));
        assert!(matches!(
            t.rename_zone("zone-1", "  "),
            Err(StudioError::InvalidZoneId(_))
        ));
        assert_eq!(t.rename_zone("zone-1", "zone-1").unwrap(), t);
    }

    #[test]
    fn remove_connection_checks_bounds() {
        let t = sample();
        assert_eq!(t.remove_connection(0).unwrap().connections.len(), 2);
        assert!(matches!(
            t.remove_connection(5),
            Err(StudioError::IndexOutOfRange { index: 5, len: 3, .. })
        ));
    }

    #[test]
    fn ensure_terrain_rules_keeps_existing_settings() {
        let mut t = Template::new("T");
        t.terrains.push(TerrainRule {
            terrain: Terrain::Lava,
            enabled: false,
            weight: Some(3),
        });
        t.terrains.push(TerrainRule::new(Terrain::Lava));
        let t = t.ensure_terrain_rules();
        assert_eq!(t.terrains.len(), Terrain::ALL.len());
        assert_eq!(t.terrains[0].terrain, Terrain::Lava);
        assert!(!t.terrains[0].enabled);
        assert_eq!(t.terrains[0].weight, Some(3));
    }

    #[test]
    fn add_shop_and_pandora_use_fresh_ids() {
        let t = sample().add_shop().add_pandora_box();
        assert_eq!(t.shops[1].id, "shop-2");
        assert_eq!(t.pandora_boxes[1].id, "pandora-2");
        let t = t.remove_shop(0).unwrap().remove_pandora_box(0).unwrap();
        assert_eq!(t.shops.len(), 1);
        assert_eq!(t.pandora_boxes.len(), 1);
    }
}
