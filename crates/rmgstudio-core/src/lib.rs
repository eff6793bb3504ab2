//! RMG Studio Core Library
//!
//! Data model and editing logic for random map generator templates.
//!
//! ## Overview
//!
//! A template generation config describes the zones of a generated map,
//! the connections between them, shops, terrain rules, army multipliers,
//! scripted feature toggles, ban lists and pandora box rewards. This crate
//! holds everything the desktop editor and the CLI share:
//!
//! - **model**: the serde document tree
//! - **edit**: copy-on-write edit operations returning new documents
//! - **editor**: session state with undo/redo snapshots
//! - **validate**: broken references and suspicious values
//! - **graph**: circular zone layout, hit-testing and PNG export
//!
//! ## Quick Start
//!
//! ```ignore
//! use rmgstudio_core::{document, graph::{GraphScene, GraphStyle}, Template};
//!
//! let template = Template::starter("Ring", 6);
//! document::save_template("ring.json".as_ref(), &template)?;
//!
//! let scene = GraphScene::build(&template, &GraphStyle::default(), None);
//! rmgstudio_core::graph::export_png(&scene, "ring.png".as_ref())?;
//! ```

pub mod document;
pub mod edit;
pub mod editor;
pub mod error;
pub mod graph;
pub mod logging;
pub mod model;
pub mod settings;
pub mod validate;

// Re-exports
pub use editor::{EditorState, History};
pub use error::{StudioError, StudioResult};
pub use graph::{GraphScene, GraphStyle, Selection};
pub use model::*;
pub use settings::{ExportOptions, Settings};
pub use validate::{validate, Issue, Severity};
