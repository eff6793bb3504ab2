//! Property-based tests for the zone graph geometry
//!
//! Uses proptest to check the circular layout, segment distance and
//! hit-test priority over arbitrary inputs.

use std::f32::consts::TAU;

use proptest::prelude::*;
use rmgstudio_core::graph::{
    distance_to_segment, hit_test, CircularLayout, EdgeSegment, HitTolerance, NodePosition, Point,
    Selection,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Distinct zone ids
fn zone_ids_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,6}-[0-9]{1,3}", 1..40)
        .prop_map(|set| set.into_iter().collect())
}

fn coord() -> impl Strategy<Value = f32> {
    -500.0f32..500.0
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

// ============================================================================
// Layout Properties
// ============================================================================

proptest! {
    /// Layout order is the sorted id order, whatever the input order
    #[test]
    fn layout_sorted_by_id(ids in zone_ids_strategy()) {
        let layout = CircularLayout::new(ids.clone(), Point::new(0.0, 0.0), 100.0);
        let mut sorted = ids;
        sorted.sort();
        let placed: Vec<String> = layout.nodes.iter().map(|n| n.id.clone()).collect();
        prop_assert_eq!(placed, sorted);
    }

    /// Angular gaps are all 2π/N and add up to a full turn
    #[test]
    fn layout_spacing_is_even(ids in zone_ids_strategy(), radius in 1.0f32..1000.0) {
        let layout = CircularLayout::new(ids, Point::new(0.0, 0.0), radius);
        let n = layout.len();
        let step = TAU / n as f32;

        let mut total = 0.0f32;
        for i in 0..n {
            let here = layout.nodes[i].angle;
            let next = if i + 1 < n { layout.nodes[i + 1].angle } else { TAU };
            let gap = next - here;
            prop_assert!((gap - step).abs() < 1e-4, "gap {} vs step {}", gap, step);
            total += gap;
        }
        prop_assert!((total - TAU).abs() < 1e-3);
    }

    /// Every node sits on the layout circle
    #[test]
    fn nodes_lie_on_circle(ids in zone_ids_strategy(), center in point_strategy(), radius in 1.0f32..1000.0) {
        let layout = CircularLayout::new(ids, center, radius);
        for node in &layout.nodes {
            let d = node.center.distance(center);
            prop_assert!((d - radius).abs() < radius * 1e-4 + 1e-3);
        }
    }
}

// ============================================================================
// Segment Distance Properties
// ============================================================================

proptest! {
    /// Points interpolated along the segment have zero distance
    #[test]
    fn points_on_segment_have_zero_distance(a in point_strategy(), b in point_strategy(), t in 0.0f32..=1.0) {
        let p = a + (b - a) * t;
        prop_assert!(distance_to_segment(p, a, b) < 1e-2);
    }

    /// Distance never exceeds the distance to either endpoint
    #[test]
    fn distance_bounded_by_endpoints(p in point_strategy(), a in point_strategy(), b in point_strategy()) {
        let d = distance_to_segment(p, a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= p.distance(a) + 1e-3);
        prop_assert!(d <= p.distance(b) + 1e-3);
    }

    /// Offsetting the midpoint perpendicular by h gives distance h
    #[test]
    fn perpendicular_offset(a in point_strategy(), b in point_strategy(), h in 0.0f32..100.0) {
        prop_assume!(a.distance(b) > 1.0);
        let dir = (b - a).normalized().unwrap();
        let normal = Point::new(-dir.y, dir.x);
        let mid = a + (b - a) * 0.5;
        let d = distance_to_segment(mid + normal * h, a, b);
        prop_assert!((d - h).abs() < 1e-2);
    }
}

// ============================================================================
// Hit-test Priority
// ============================================================================

proptest! {
    /// A pointer inside a node's reach selects a zone even when it also
    /// lies on an edge
    #[test]
    fn nodes_take_priority_over_edges(offset in 0.0f32..27.9, len in 60.0f32..400.0) {
        let nodes = vec![
            NodePosition { id: "a".into(), center: Point::new(0.0, 0.0), angle: 0.0 },
            NodePosition { id: "b".into(), center: Point::new(len, 0.0), angle: 0.0 },
        ];
        let edges = vec![EdgeSegment { index: 0, from: nodes[0].center, to: nodes[1].center }];
        let tolerance = HitTolerance::default();

        let hit = hit_test(&nodes, &edges, Point::new(offset, 0.0), &tolerance);
        prop_assert!(matches!(hit, Some(Selection::Zone(_))));
    }

    /// Outside all node reaches but near an edge, the edge is selected
    #[test]
    fn edges_hit_between_nodes(t in 0.3f32..0.7, h in -7.9f32..7.9) {
        let len = 300.0;
        let nodes = vec![
            NodePosition { id: "a".into(), center: Point::new(0.0, 0.0), angle: 0.0 },
            NodePosition { id: "b".into(), center: Point::new(len, 0.0), angle: 0.0 },
        ];
        let edges = vec![EdgeSegment { index: 7, from: nodes[0].center, to: nodes[1].center }];
        let tolerance = HitTolerance::default();

        let hit = hit_test(&nodes, &edges, Point::new(len * t, h), &tolerance);
        prop_assert_eq!(hit, Some(Selection::Connection(7)));
    }
}
