//! Desktop components for RMG Studio.
//!
//! Generic form widgets live in `rmgstudio-ui`; these components know about
//! the editor session and the template model.

mod connection_row;
mod editor_frame;
mod graph_inspector;
mod pandora_card;
mod shop_card;
mod status_bar;
mod toolbar;
mod zone_card;
mod zone_graph;

pub use connection_row::ConnectionRow;
pub use editor_frame::{EditorFrame, Panel};
pub use graph_inspector::GraphInspector;
pub use pandora_card::PandoraCard;
pub use shop_card::ShopCard;
pub use status_bar::StatusBar;
pub use toolbar::Toolbar;
pub use zone_card::ZoneCard;
pub use zone_graph::ZoneGraph;
