//! Colors and drawing parameters for the zone graph.
//!
//! The same values drive the interactive SVG view and the PNG export.

use serde::{Deserialize, Serialize};

use super::hit::HitTolerance;
use crate::model::{Terrain, ZoneKind};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS hex form `#rrggbb` (alpha dropped)
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// === Canvas ===
pub const BACKGROUND: Rgba = Rgba::rgb(0x0a, 0x0e, 0x0f);
pub const NODE_STROKE: Rgba = Rgba::rgb(0x1a, 0x1a, 0x1a);
pub const START_STROKE: Rgba = Rgba::rgb(0xd4, 0xaf, 0x37);
pub const LABEL: Rgba = Rgba::rgb(0xf5, 0xf5, 0xf5);

// === Routes ===
pub const MAIN_ROUTE: Rgba = Rgba::rgb(0xd4, 0xaf, 0x37);
pub const SECONDARY_ROUTE: Rgba = Rgba::rgb(0x5f, 0x8f, 0xff);
pub const SELECTED: Rgba = Rgba::rgb(0x00, 0xd4, 0xaa);

/// Fill for zones without a terrain
pub const UNKNOWN_TERRAIN: Rgba = Rgba::rgb(0x80, 0x80, 0x80);

/// Dash pattern (on, off) for guarded connections
pub const GUARDED_DASH: [f32; 2] = [8.0, 6.0];

/// Fixed terrain → fill color lookup
pub fn terrain_color(terrain: Option<Terrain>) -> Rgba {
    match terrain {
        None => UNKNOWN_TERRAIN,
        Some(Terrain::Grass) => Rgba::rgb(0x4c, 0x9a, 0x2a),
        Some(Terrain::Dirt) => Rgba::rgb(0x8b, 0x6b, 0x3d),
        Some(Terrain::Sand) => Rgba::rgb(0xd8, 0xc0, 0x7a),
        Some(Terrain::Snow) => Rgba::rgb(0xe8, 0xf0, 0xf8),
        Some(Terrain::Swamp) => Rgba::rgb(0x4a, 0x6b, 0x55),
        Some(Terrain::Rough) => Rgba::rgb(0x9c, 0x7f, 0x5a),
        Some(Terrain::Lava) => Rgba::rgb(0xc8, 0x3c, 0x1e),
        Some(Terrain::Subterranean) => Rgba::rgb(0x5a, 0x46, 0x3c),
        Some(Terrain::Highlands) => Rgba::rgb(0x7a, 0x8c, 0x4e),
        Some(Terrain::Wasteland) => Rgba::rgb(0xa8, 0x8e, 0x6a),
        Some(Terrain::Water) => Rgba::rgb(0x2a, 0x5c, 0xaa),
    }
}

/// Border color for a zone node
pub fn zone_stroke(kind: ZoneKind) -> Rgba {
    match kind {
        ZoneKind::Start => START_STROKE,
        _ => NODE_STROKE,
    }
}

/// Drawing parameters for the zone graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphStyle {
    pub width: f32,
    pub height: f32,
    /// Gap between the outermost node and the canvas border
    pub padding: f32,
    pub show_arrows: bool,
    pub show_labels: bool,
    pub arrow_length: f32,
    /// Half of the arrowhead opening angle, radians
    pub arrow_half_angle: f32,
    pub edge_width: f32,
    pub main_edge_width: f32,
    pub tolerance: HitTolerance,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 720.0,
            padding: 40.0,
            show_arrows: true,
            show_labels: true,
            arrow_length: 12.0,
            arrow_half_angle: 0.45,
            edge_width: 2.0,
            main_edge_width: 3.5,
            tolerance: HitTolerance::default(),
        }
    }
}

impl GraphStyle {
    pub fn node_radius(&self) -> f32 {
        self.tolerance.node_radius
    }

    /// Same style at a different canvas size
    pub fn with_size(&self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgba::rgb(0xd4, 0xaf, 0x37).to_hex(), "#d4af37");
        assert_eq!(Rgba::rgb(0, 1, 2).to_hex(), "#000102");
    }

    #[test]
    fn every_terrain_has_distinct_color() {
        let mut colors: Vec<Rgba> = Terrain::ALL.iter().map(|t| terrain_color(Some(*t))).collect();
        colors.push(terrain_color(None));
        let count = colors.len();
        colors.sort_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();
        assert_eq!(colors.len(), count);
    }

    #[test]
    fn main_and_secondary_routes_differ() {
        assert_ne!(MAIN_ROUTE, SECONDARY_ROUTE);
    }

    #[test]
    fn style_defaults_fill_missing_fields() {
        let style: GraphStyle = serde_json::from_str(r#"{"width":300}"#).unwrap();
        assert_eq!(style.width, 300.0);
        assert_eq!(style.height, 720.0);
        assert!(style.show_arrows);
    }
}
