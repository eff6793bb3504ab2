//! Pointer hit-testing against the zone graph.

use serde::{Deserialize, Serialize};

use super::geometry::{distance_to_segment, Point};
use super::layout::NodePosition;

/// What the user has selected in the graph. A zone and a connection are
/// never selected at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Zone(String),
    /// Index into `Template::connections`
    Connection(usize),
}

impl Selection {
    pub fn zone_id(&self) -> Option<&str> {
        match self {
            Selection::Zone(id) => Some(id),
            Selection::Connection(_) => None,
        }
    }

    pub fn connection_index(&self) -> Option<usize> {
        match self {
            Selection::Connection(i) => Some(*i),
            Selection::Zone(_) => None,
        }
    }
}

/// Tolerances for hit-testing, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HitTolerance {
    pub node_radius: f32,
    /// Extra slack around a node's circle
    pub node_margin: f32,
    /// Maximum distance from a connection line
    pub edge_threshold: f32,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self {
            node_radius: 22.0,
            node_margin: 6.0,
            edge_threshold: 8.0,
        }
    }
}

/// A connection as a line between two node centers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    /// Index into `Template::connections`
    pub index: usize,
    pub from: Point,
    pub to: Point,
}

/// Find what lies under `pointer`.
///
/// The nearest node within `node_radius + node_margin` wins. Only when no
/// node is in reach is the nearest edge within `edge_threshold` considered.
pub fn hit_test(
    nodes: &[NodePosition],
    edges: &[EdgeSegment],
    pointer: Point,
    tolerance: &HitTolerance,
) -> Option<Selection> {
    let node_reach = tolerance.node_radius + tolerance.node_margin;
    let nearest_node = nodes
        .iter()
        .map(|n| (n, n.center.distance(pointer)))
        .filter(|(_, d)| *d <= node_reach)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((node, _)) = nearest_node {
        return Some(Selection::Zone(node.id.clone()));
    }

    edges
        .iter()
        .map(|e| (e, distance_to_segment(pointer, e.from, e.to)))
        .filter(|(_, d)| *d <= tolerance.edge_threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(edge, _)| Selection::Connection(edge.index))
}
