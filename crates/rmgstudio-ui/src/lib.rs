//! RMG Studio UI Components
//!
//! Dioxus form widgets used by the template editor panels.
//!
//! Every widget is controlled: it receives the current value as a prop and
//! reports the new value through an `EventHandler`. Widgets never hold the
//! document themselves, so panels can build copy-on-write updates:
//!
//! ```rust,ignore
//! TextField {
//!     label: "name".to_string(),
//!     value: zone.id.clone(),
//!     on_change: move |id| on_change.call(Zone { id, ..zone.clone() }),
//! }
//! ```
//!
//! ## Widgets
//!
//! - [`TextField`] / [`OptionalTextField`]: single-line text
//! - [`NumberField`] / [`CountField`]: optional numbers, empty means unset
//! - [`Checkbox`] / [`OptionToggle`]: booleans and tri-state toggles
//! - [`Select`]: dropdown over a fixed option list
//! - [`ChipList`]: editable list of short strings
//!
//! [`options`] builds select lists for the model's enums.

pub mod components;
pub mod options;

pub use components::*;
