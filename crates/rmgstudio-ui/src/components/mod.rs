//! Reusable form widgets.
//!
//! Styling comes from the global stylesheet in the desktop app; widgets
//! only attach class names.

mod button;
mod checkbox;
mod chip_list;
mod input;
mod number;
mod section;
mod select;

pub use button::*;
pub use checkbox::*;
pub use chip_list::*;
pub use input::*;
pub use number::*;
pub use section::*;
pub use select::*;
