//! Zone Graph View
//!
//! Draws a [`GraphScene`] as inline SVG. Clicks are hit-tested against the
//! same scene, so what you see is what you select.
//!
//! The SVG ignores pointer events; the wrapping div receives the click and
//! its element coordinates map 1:1 onto scene coordinates.

use dioxus::prelude::*;
use rmgstudio_core::graph::{style, GraphScene, Point};
use rmgstudio_core::Selection;

#[derive(Props, Clone, PartialEq)]
pub struct ZoneGraphProps {
    pub scene: GraphScene,
    pub on_select: EventHandler<Option<Selection>>,
}

#[component]
pub fn ZoneGraph(props: ZoneGraphProps) -> Element {
    let scene = props.scene.clone();
    let on_select = props.on_select;
    let hit_scene = props.scene.clone();

    let width = scene.width;
    let height = scene.height;
    let background = scene.background.to_hex();
    let label_color = style::LABEL.to_hex();

    rsx! {
        div {
            class: "zone-graph",
            style: "width: {width}px; height: {height}px;",
            onclick: move |evt: MouseEvent| {
                let coords = evt.element_coordinates();
                let pointer = Point::new(coords.x as f32, coords.y as f32);
                let hit = hit_scene.hit_test(pointer);
                tracing::debug!(x = pointer.x, y = pointer.y, ?hit, "graph click");
                on_select.call(hit);
            },
            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                style: "pointer-events: none; display: block;",
                rect { x: "0", y: "0", width: "{width}", height: "{height}", fill: "{background}" }

                for edge in scene.edges.iter() {
                    g { key: "edge-{edge.index}",
                        line {
                            x1: "{edge.start.x}",
                            y1: "{edge.start.y}",
                            x2: "{edge.end.x}",
                            y2: "{edge.end.y}",
                            stroke: "{edge.color.to_hex()}",
                            stroke_width: "{edge.width}",
                            stroke_linecap: "round",
                            stroke_dasharray: "{dash_attr(edge.dash)}",
                        }
                        for (i, head) in edge.heads.iter().enumerate() {
                            polygon {
                                key: "{i}",
                                points: "{points_attr(head)}",
                                fill: "{edge.color.to_hex()}",
                            }
                        }
                    }
                }

                for node in scene.nodes.iter() {
                    g { key: "node-{node.id}",
                        circle {
                            cx: "{node.center.x}",
                            cy: "{node.center.y}",
                            r: "{node.radius}",
                            fill: "{node.fill.to_hex()}",
                            stroke: "{node.stroke.to_hex()}",
                            stroke_width: "{node.stroke_width}",
                        }
                        if scene.show_labels {
                            text {
                                x: "{node.center.x}",
                                y: format!("{}", node.center.y + node.radius + 14.0),
                                text_anchor: "middle",
                                font_size: "12",
                                fill: "{label_color}",
                                "{node.id}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// SVG `points` attribute for a triangle
fn points_attr(points: &[Point; 3]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG `stroke-dasharray` value
fn dash_attr(dash: Option<[f32; 2]>) -> String {
    match dash {
        Some([on, off]) => format!("{} {}", on, off),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_points() {
        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 5.0), Point::new(2.5, 7.3)];
        assert_eq!(points_attr(&tri), "0.0,0.0 10.0,5.0 2.5,7.3");
    }

    #[test]
    fn dash_pattern() {
        assert_eq!(dash_attr(Some([8.0, 6.0])), "8 6");
        assert_eq!(dash_attr(None), "none");
    }
}
