//! Zone graph PNG export tests
//!
//! Exported files are decoded again with the `image` crate to check size
//! and a few known pixels.

use rmgstudio_core::graph::{export_png, style, GraphScene, GraphStyle, Selection};
use rmgstudio_core::{ExportOptions, Template, Terrain};
use tempfile::TempDir;

fn template() -> Template {
    let mut t = Template::starter("Export", 6);
    for (zone, terrain) in t.zones.iter_mut().zip(Terrain::ALL) {
        zone.terrain = Some(terrain);
    }
    t.connections[2].guarded = true;
    t
}

#[test]
fn test_export_writes_decodable_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.png");
    let style = GraphStyle::default().with_size(640.0, 480.0);
    let scene = GraphScene::build(&template(), &style, None);

    export_png(&scene, &path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (640, 480));
}

#[test]
fn test_export_uses_export_options_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.png");
    let options = ExportOptions {
        width: 900,
        height: 700,
        show_arrows: false,
    };
    let scene = GraphScene::build(&template(), &options.style(&GraphStyle::default()), None);
    assert!(scene.edges.iter().all(|e| e.heads.is_empty()));

    export_png(&scene, &path).unwrap();

    let image = image::open(&path).unwrap();
    assert_eq!((image.width(), image.height()), (900, 700));
}

#[test]
fn test_zone_pixels_use_terrain_colors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colors.png");
    let t = template();
    let scene = GraphScene::build(&t, &GraphStyle::default(), None);

    export_png(&scene, &path).unwrap();
    let image = image::open(&path).unwrap().to_rgba8();

    for node in &scene.nodes {
        let zone = t.zone(&node.id).unwrap();
        let expected = style::terrain_color(zone.terrain);
        let px = image.get_pixel(node.center.x as u32, node.center.y as u32);
        assert_eq!(px.0, [expected.r, expected.g, expected.b, 255], "zone {}", node.id);
    }
}

#[test]
fn test_export_empty_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.png");
    let scene = GraphScene::build(&Template::new("Empty"), &GraphStyle::default(), None);

    export_png(&scene, &path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    let bg = style::BACKGROUND;
    assert!(image.pixels().all(|p| p.0 == [bg.r, bg.g, bg.b, 255]));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("graph.png");
    let scene = GraphScene::build(&template(), &GraphStyle::default(), None);

    assert!(export_png(&scene, &path).is_err());
}

#[test]
fn test_selected_zone_changes_output() {
    let t = template();
    let style = GraphStyle::default().with_size(320.0, 320.0);
    let plain = rmgstudio_core::graph::encode_png(&GraphScene::build(&t, &style, None)).unwrap();
    let selected = rmgstudio_core::graph::encode_png(&GraphScene::build(
        &t,
        &style,
        Some(&Selection::Zone("zone-1".into())),
    ))
    .unwrap();
    assert_ne!(plain, selected);
}
