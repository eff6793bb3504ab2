//! Circular zone layout.
//!
//! Zones are sorted by id and spread evenly around a circle: the zone at
//! sorted index `i` of `n` sits at angle `2π·i/n`, measured from the +x axis
//! (clockwise on screen because y grows downward).

use std::f32::consts::TAU;

use super::geometry::Point;

/// Placement of one zone
#[derive(Debug, Clone, PartialEq)]
pub struct NodePosition {
    pub id: String,
    pub center: Point,
    /// Angle on the layout circle in radians, in `[0, 2π)`
    pub angle: f32,
}

/// Zones placed evenly around a circle
#[derive(Debug, Clone, PartialEq)]
pub struct CircularLayout {
    pub center: Point,
    pub radius: f32,
    pub nodes: Vec<NodePosition>,
}

impl CircularLayout {
    /// Lay out the given ids. Ids are sorted and de-duplicated first, so the
    /// result does not depend on input order.
    pub fn new<I, S>(ids: I, center: Point, radius: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        ids.sort();
        ids.dedup();

        let n = ids.len();
        let nodes = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let angle = TAU * i as f32 / n as f32;
                let center = center + Point::new(angle.cos(), angle.sin()) * radius;
                NodePosition { id, center, angle }
            })
            .collect();

        Self {
            center,
            radius,
            nodes,
        }
    }

    /// Center of the node for a zone id
    pub fn position(&self, id: &str) -> Option<Point> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.center)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Largest layout radius that keeps nodes of `node_radius` plus `padding`
/// inside a `width` x `height` canvas. Never negative.
pub fn fit_radius(width: f32, height: f32, node_radius: f32, padding: f32) -> f32 {
    (width.min(height) / 2.0 - node_radius - padding).max(0.0)
}
