//! Renderer-independent description of the zone graph.
//!
//! A [`GraphScene`] holds every shape to draw, already positioned and
//! colored. The desktop SVG view and the PNG rasterizer both draw from it,
//! and pointer hit-testing runs against the same layout.

use super::geometry::{arrow_head, trim_segment, Point};
use super::hit::{hit_test, EdgeSegment, HitTolerance, Selection};
use super::layout::{fit_radius, CircularLayout};
use super::style::{self, GraphStyle, Rgba};
use crate::model::{Template, ZoneKind};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub kind: ZoneKind,
    pub center: Point,
    pub radius: f32,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdge {
    /// Index into `Template::connections`
    pub index: usize,
    /// Start of the visible line, on the source node's rim
    pub start: Point,
    /// End of the visible line, on the target node's rim
    pub end: Point,
    pub color: Rgba,
    pub width: f32,
    /// Dash pattern (on, off) for guarded connections
    pub dash: Option<[f32; 2]>,
    /// Filled arrowhead triangles
    pub heads: Vec<[Point; 3]>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphScene {
    pub width: f32,
    pub height: f32,
    pub background: Rgba,
    pub show_labels: bool,
    pub layout: CircularLayout,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    /// Center-to-center segments used for hit-testing
    pub segments: Vec<EdgeSegment>,
    pub tolerance: HitTolerance,
}

impl GraphScene {
    /// Lay out and style the zones and connections of a template
    pub fn build(template: &Template, style: &GraphStyle, selection: Option<&Selection>) -> Self {
        let node_radius = style.node_radius();
        let center = Point::new(style.width / 2.0, style.height / 2.0);
        let radius = fit_radius(style.width, style.height, node_radius, style.padding);
        let layout = CircularLayout::new(template.zones.iter().map(|z| z.id.as_str()), center, radius);

        let selected_zone = selection.and_then(Selection::zone_id);
        let selected_edge = selection.and_then(Selection::connection_index);

        let nodes = layout
            .nodes
            .iter()
            .map(|pos| {
                let zone = template.zone(&pos.id);
                let kind = zone.map(|z| z.kind).unwrap_or_default();
                let selected = selected_zone == Some(pos.id.as_str());
                SceneNode {
                    id: pos.id.clone(),
                    kind,
                    center: pos.center,
                    radius: node_radius,
                    fill: style::terrain_color(zone.and_then(|z| z.terrain)),
                    stroke: if selected {
                        style::SELECTED
                    } else {
                        style::zone_stroke(kind)
                    },
                    stroke_width: if selected { 4.0 } else { 2.0 },
                    selected,
                }
            })
            .collect();

        let mut edges = Vec::new();
        let mut segments = Vec::new();
        for (index, conn) in template.connections.iter().enumerate() {
            let (Some(from), Some(to)) = (layout.position(&conn.from), layout.position(&conn.to))
            else {
                tracing::debug!(index, from = %conn.from, to = %conn.to, "skipping connection to unknown zone");
                continue;
            };
            segments.push(EdgeSegment { index, from, to });

            // Self-loops and overlapping nodes have nothing visible to draw
            let Some((start, end)) = trim_segment(from, to, node_radius, node_radius) else {
                continue;
            };

            let selected = selected_edge == Some(index);
            let color = if selected {
                style::SELECTED
            } else if conn.main {
                style::MAIN_ROUTE
            } else {
                style::SECONDARY_ROUTE
            };
            let width = if conn.main {
                style.main_edge_width
            } else {
                style.edge_width
            };

            let mut heads = Vec::new();
            if style.show_arrows {
                heads.extend(arrow_head(end, start, style.arrow_length, style.arrow_half_angle));
                if conn.two_way {
                    heads.extend(arrow_head(start, end, style.arrow_length, style.arrow_half_angle));
                }
            }

            edges.push(SceneEdge {
                index,
                start,
                end,
                color,
                width: if selected { width + 1.5 } else { width },
                dash: conn.guarded.then_some(style::GUARDED_DASH),
                heads,
                selected,
            });
        }

        Self {
            width: style.width,
            height: style.height,
            background: style::BACKGROUND,
            show_labels: style.show_labels,
            layout,
            nodes,
            edges,
            segments,
            tolerance: style.tolerance,
        }
    }

    /// What lies under a pointer position in canvas coordinates
    pub fn hit_test(&self, pointer: Point) -> Option<Selection> {
        hit_test(&self.layout.nodes, &self.segments, pointer, &self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, Terrain};

    fn template() -> Template {
        let mut t = Template::starter("Ring", 3);
        t.zones[0].terrain = Some(Terrain::Lava);
        t.connections[1].guarded = true;
        t
    }

    #[test]
    fn nodes_follow_sorted_layout() {
        let scene = GraphScene::build(&template(), &GraphStyle::default(), None);
        assert_eq!(scene.nodes.len(), 3);
        assert_eq!(scene.nodes[0].id, "zone-1");
        assert_eq!(scene.nodes[0].fill, style::terrain_color(Some(Terrain::Lava)));
        assert_eq!(scene.nodes[1].fill, style::UNKNOWN_TERRAIN);
        assert_eq!(scene.nodes[0].stroke, style::START_STROKE);
    }

    #[test]
    fn edges_styled_by_route_and_guard() {
        let scene = GraphScene::build(&template(), &GraphStyle::default(), None);
        assert_eq!(scene.edges.len(), 3);
        assert_eq!(scene.edges[0].color, style::MAIN_ROUTE);
        assert_eq!(scene.edges[1].color, style::SECONDARY_ROUTE);
        assert!(scene.edges[0].dash.is_none());
        assert_eq!(scene.edges[1].dash, Some(style::GUARDED_DASH));
    }

    #[test]
    fn two_way_edges_get_two_heads() {
        let mut t = template();
        t.connections[2].two_way = false;
        let scene = GraphScene::build(&t, &GraphStyle::default(), None);
        assert_eq!(scene.edges[0].heads.len(), 2);
        assert_eq!(scene.edges[2].heads.len(), 1);

        let style = GraphStyle {
            show_arrows: false,
            ..GraphStyle::default()
        };
        let scene = GraphScene::build(&t, &style, None);
        assert!(scene.edges.iter().all(|e| e.heads.is_empty()));
    }

    #[test]
    fn edges_stop_at_node_rims() {
        let scene = GraphScene::build(&template(), &GraphStyle::default(), None);
        let edge = &scene.edges[0];
        let from = scene.layout.position("zone-1").unwrap();
        assert!((edge.start.distance(from) - 22.0).abs() < 1e-3);
    }

    #[test]
    fn dangling_connections_are_skipped() {
        let mut t = template();
        t.connections.push(Connection::new("zone-1", "ghost"));
        let scene = GraphScene::build(&t, &GraphStyle::default(), None);
        assert_eq!(scene.edges.len(), 3);
        assert_eq!(scene.segments.len(), 3);
    }

    #[test]
    fn selection_is_highlighted() {
        let t = template();
        let style = GraphStyle::default();
        let scene = GraphScene::build(&t, &style, Some(&Selection::Connection(1)));
        assert!(scene.edges[1].selected);
        assert_eq!(scene.edges[1].color, style::SELECTED);
        assert!(scene.nodes.iter().all(|n| !n.selected));

        let scene = GraphScene::build(&t, &style, Some(&Selection::Zone("zone-2".into())));
        assert!(scene.nodes[1].selected);
        assert!(scene.edges.iter().all(|e| !e.selected));
    }

    #[test]
    fn hit_test_uses_layout() {
        let scene = GraphScene::build(&template(), &GraphStyle::default(), None);
        let center = scene.layout.position("zone-3").unwrap();
        assert_eq!(scene.hit_test(center), Some(Selection::Zone("zone-3".into())));
        assert_eq!(scene.hit_test(Point::new(scene.width / 2.0, scene.height / 2.0)), None);
    }
}
