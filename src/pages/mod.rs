//! Editor panels, one per route.

mod army;
mod bans;
mod connections;
mod features;
mod general;
mod graph;
mod pandora;
mod shops;
mod terrains;
mod zones;

pub use army::Army;
pub use bans::Bans;
pub use connections::Connections;
pub use features::Features;
pub use general::General;
pub use graph::Graph;
pub use pandora::Pandora;
pub use shops::Shops;
pub use terrains::Terrains;
pub use zones::Zones;
