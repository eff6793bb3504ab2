//! Zone graph: circular layout, hit-testing, styling and PNG export.
//!
//! ```text
//! Template ──► GraphScene::build ──► SVG view (desktop)
//!                    │           └──► export::export_png (tiny-skia → image)
//!                    └──► GraphScene::hit_test (pointer → Selection)
//! ```

pub mod export;
pub mod geometry;
pub mod hit;
pub mod layout;
pub mod scene;
pub mod style;

pub use export::{encode_png, export_png, rasterize};
pub use geometry::{arrow_head, distance_to_segment, Point};
pub use hit::{hit_test, EdgeSegment, HitTolerance, Selection};
pub use layout::{fit_radius, CircularLayout, NodePosition};
pub use scene::{GraphScene, SceneEdge, SceneNode};
pub use style::{terrain_color, GraphStyle, Rgba};
