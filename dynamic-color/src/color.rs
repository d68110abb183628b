//! Color spaces used by the dynamic color engine.
//!
//! Every generated color travels the same one-way pipeline:
//!
//! ```text
//! Oklch -> Oklab -> linear sRGB -> gamma-encoded sRGB -> quantized sRGB
//! ```
//!
//! The perceptual model is Oklab (Björn Ottosson, 2020) with its cylindrical
//! Oklch form. The display space is sRGB with the IEC 61966-2-1 transfer
//! function and a D65 white point. All math runs in `f64`; nothing here holds
//! state, so conversions can be called from any thread.
//!
//! # Example
//!
//! ```
//! use dynamic_color::color::{Color, Oklch};
//!
//! let teal = Oklch::new(0.6, 0.1, 180.0);
//! let display = teal.to_display_color();
//! assert_eq!(display.to_hex().len(), 7);
//! ```

mod oklab;
mod oklch;
mod srgb;

pub use oklab::Oklab;
pub use oklch::{Oklch, normalize_hue};
pub use srgb::{LinearSrgb, Srgb, Srgb8};

/// A color that can be expressed in linear sRGB.
///
/// Each color space implements the one conversion it owns; the display-side
/// steps are shared.
pub trait Color {
    /// Converts the color to linear-light sRGB.
    ///
    /// The result may lie outside `[0, 1]` when the color is out of gamut.
    fn to_linear_srgb(&self) -> LinearSrgb;

    /// Converts the color to gamma-encoded sRGB, clamping out-of-gamut
    /// channels.
    fn to_srgb(&self) -> Srgb {
        self.to_linear_srgb().to_srgb()
    }

    /// Converts the color to an 8-bit display color.
    fn to_display_color(&self) -> Srgb8 {
        self.to_srgb().quantize8()
    }
}
