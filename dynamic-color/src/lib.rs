//! Dynamic color schemes derived from a single seed color.
//!
//! The crate turns one seed in the Oklch perceptual space into a family of
//! tonal swatches, one per color role (`accent1`..`accent3`,
//! `neutral1`..`neutral2`), each covering the shades `0` to `1000`. UI layers
//! then pick `(role, shade)` pairs for their own theme slots.
//!
//! # Modules
//!
//! - [`color`] - Oklch, Oklab and sRGB color spaces and conversions.
//! - [`target`] - Roles and the read-only [`TargetCatalog`].
//! - [`scheme`] - The generator and [`ColorScheme`].
//! - [`swatch`] - [`ColorSwatch`], shade lookup and the per-scheme cache.
//!
//! # Usage
//!
//! ```
//! use dynamic_color::{ColorScheme, Oklch, Role, TargetCatalog};
//!
//! // The catalog is plain configuration; build it once and pass it around.
//! let catalog = TargetCatalog::material_you();
//!
//! // Regenerate whenever the seed changes.
//! let scheme = ColorScheme::new(Oklch::new(1.0, 0.2, 180.0), &catalog)?;
//! let primary = scheme.shade(Role::Accent1, 600)?;
//! let background = scheme.shade(Role::Neutral1, 50)?;
//! assert_ne!(primary, background);
//! # Ok::<(), dynamic_color::Error>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod error;
pub mod scheme;
pub mod swatch;
pub mod target;

pub use crate::{
    color::{Color, LinearSrgb, Oklab, Oklch, Srgb, Srgb8},
    error::{Error, Result},
    scheme::{ColorScheme, generate_scheme},
    swatch::{ColorSwatch, Shade, ShadeCache, shade},
    target::{MATERIAL_SHADES, Role, Target, TargetCatalog},
};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn colors_serialize_as_plain_structs() {
        let json = serde_json::to_string(&Srgb8::new(1, 2, 3)).expect("serialize");
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);

        let seed: Oklch = serde_json::from_str(r#"{"l":1.0,"c":0.2,"h":180.0}"#).expect("parse");
        assert_eq!(seed, Oklch::new(1.0, 0.2, 180.0));
    }

    #[test]
    fn roles_use_lowercase_names() {
        let json = serde_json::to_string(&Role::Neutral2).expect("serialize");
        assert_eq!(json, r#""neutral2""#);
    }
}
