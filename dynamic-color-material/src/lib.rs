//! Material color slots built from dynamic color schemes.
//!
//! ## Usage
//!
//! Map a seed hue to Material `primary`/`background`/`on*` colors and keep
//! the current values in a [`ThemeState`] that the UI reads from.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod state;
pub mod theme;

pub use state::ThemeState;
pub use theme::{DynamicTheme, MaterialColors};
