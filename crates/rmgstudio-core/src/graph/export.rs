//! PNG export of a [`GraphScene`].
//!
//! The scene is rasterized with tiny-skia, converted to an `image` RGBA
//! buffer and encoded as PNG.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tiny_skia::{
    Color, FillRule, Paint, Path as SkiaPath, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};

use super::geometry::Point;
use super::scene::{GraphScene, SceneEdge, SceneNode};
use super::style::Rgba;
use crate::error::{StudioError, StudioResult};

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn line_path(a: Point, b: Point) -> Option<SkiaPath> {
    let mut pb = PathBuilder::new();
    pb.move_to(a.x, a.y);
    pb.line_to(b.x, b.y);
    pb.finish()
}

fn triangle_path(points: &[Point; 3]) -> Option<SkiaPath> {
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x, points[0].y);
    pb.line_to(points[1].x, points[1].y);
    pb.line_to(points[2].x, points[2].y);
    pb.close();
    pb.finish()
}

fn draw_edge(pixmap: &mut Pixmap, edge: &SceneEdge) {
    let paint = paint(edge.color);
    if let Some(path) = line_path(edge.start, edge.end) {
        let stroke = Stroke {
            width: edge.width,
            dash: edge
                .dash
                .and_then(|[on, off]| StrokeDash::new(vec![on, off], 0.0)),
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
    for head in &edge.heads {
        if let Some(path) = triangle_path(head) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

fn draw_node(pixmap: &mut Pixmap, node: &SceneNode) {
    let Some(path) = PathBuilder::from_circle(node.center.x, node.center.y, node.radius) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &paint(node.fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    let stroke = Stroke {
        width: node.stroke_width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint(node.stroke), &stroke, Transform::identity(), None);
}

/// Draw the scene onto a new pixmap of the scene's size
pub fn rasterize(scene: &GraphScene) -> StudioResult<Pixmap> {
    let width = scene.width.round().max(1.0) as u32;
    let height = scene.height.round().max(1.0) as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        StudioError::Render(format!("cannot allocate a {}x{} canvas", width, height))
    })?;

    let bg = scene.background;
    pixmap.fill(Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

    // Edges first so nodes cover the line ends
    for edge in &scene.edges {
        draw_edge(&mut pixmap, edge);
    }
    for node in &scene.nodes {
        draw_node(&mut pixmap, node);
    }

    Ok(pixmap)
}

/// Convert tiny-skia's premultiplied pixels to a straight-alpha image
pub fn to_rgba_image(pixmap: &Pixmap) -> StudioResult<RgbaImage> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| StudioError::Render("pixel buffer size mismatch".to_string()))
}

/// Render the scene and encode it as PNG bytes
pub fn encode_png(scene: &GraphScene) -> StudioResult<Vec<u8>> {
    let image = to_rgba_image(&rasterize(scene)?)?;
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// Render the scene and write it to `path` as PNG
pub fn export_png(scene: &GraphScene, path: &Path) -> StudioResult<()> {
    let bytes = encode_png(scene)?;
    std::fs::write(path, bytes)?;
    tracing::info!(
        path = %path.display(),
        zones = scene.nodes.len(),
        connections = scene.edges.len(),
        "exported zone graph"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::style::{self, GraphStyle};
    use crate::model::Template;

    fn scene() -> GraphScene {
        let style = GraphStyle::default().with_size(320.0, 240.0);
        GraphScene::build(&Template::starter("Ring", 4), &style, None)
    }

    #[test]
    fn rasterize_matches_scene_size() {
        let pixmap = rasterize(&scene()).unwrap();
        assert_eq!(pixmap.width(), 320);
        assert_eq!(pixmap.height(), 240);
    }

    #[test]
    fn background_fills_corners() {
        let image = to_rgba_image(&rasterize(&scene()).unwrap()).unwrap();
        let px = image.get_pixel(0, 0);
        let bg = style::BACKGROUND;
        assert_eq!(px.0, [bg.r, bg.g, bg.b, 255]);
    }

    #[test]
    fn node_centers_take_terrain_color() {
        let s = scene();
        let image = to_rgba_image(&rasterize(&s).unwrap()).unwrap();
        let c = s.nodes[0].center;
        let px = image.get_pixel(c.x as u32, c.y as u32);
        let fill = style::UNKNOWN_TERRAIN;
        assert_eq!(px.0, [fill.r, fill.g, fill.b, 255]);
    }

    #[test]
    fn encoded_png_has_signature() {
        let bytes = encode_png(&scene()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
