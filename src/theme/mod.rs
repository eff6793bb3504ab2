//! Visual theme for RMG Studio.

mod styles;

pub use styles::GLOBAL_STYLES;
