use std::fmt;

use super::{Color, Oklab};
use crate::error::{Error, Result};

/// Rec. 709 luminance weights for linear sRGB.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

fn encode_gamma(v: f64) -> f64 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn decode_gamma(v: f64) -> f64 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear-light sRGB. Channels may fall outside `[0, 1]` for out-of-gamut
/// colors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSrgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl LinearSrgb {
    /// Creates a linear sRGB triple.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Converts to Oklab.
    pub fn to_oklab(self) -> Oklab {
        Oklab::from(self)
    }

    /// Gamma-encodes the triple, clamping each channel to `[0, 1]` first.
    ///
    /// Clamping is per channel and does not preserve hue.
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(
            encode_gamma(self.r),
            encode_gamma(self.g),
            encode_gamma(self.b),
        )
    }

    /// Whether every channel lies inside `[0, 1]`.
    pub fn is_in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }

    /// Whether every channel is a finite number.
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Relative luminance of the clamped triple.
    pub fn relative_luminance(self) -> f64 {
        let [wr, wg, wb] = LUMINANCE_WEIGHTS;
        wr * self.r.clamp(0.0, 1.0) + wg * self.g.clamp(0.0, 1.0) + wb * self.b.clamp(0.0, 1.0)
    }
}

impl Color for LinearSrgb {
    fn to_linear_srgb(&self) -> LinearSrgb {
        *self
    }
}

/// Gamma-encoded (display) sRGB with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Srgb {
    /// Creates a gamma-encoded sRGB triple.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decodes the gamma curve back to linear light.
    pub fn to_linear(self) -> LinearSrgb {
        LinearSrgb::new(
            decode_gamma(self.r),
            decode_gamma(self.g),
            decode_gamma(self.b),
        )
    }

    /// Quantizes each channel to an unsigned integer of `bit_depth` bits,
    /// rounding to nearest.
    pub fn quantize(self, bit_depth: u8) -> Result<[u32; 3]> {
        if !(1..=16).contains(&bit_depth) {
            return Err(Error::UnsupportedBitDepth(bit_depth));
        }
        let max = f64::from((1u32 << bit_depth) - 1);
        let q = |v: f64| (v.clamp(0.0, 1.0) * max).round() as u32;
        Ok([q(self.r), q(self.g), q(self.b)])
    }

    /// Quantizes to 8 bits per channel.
    pub fn quantize8(self) -> Srgb8 {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Srgb8::new(q(self.r), q(self.g), q(self.b))
    }
}

impl Color for Srgb {
    fn to_linear_srgb(&self) -> LinearSrgb {
        self.to_linear()
    }

    fn to_srgb(&self) -> Srgb {
        *self
    }
}

/// An opaque 8-bit sRGB color, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Srgb8 {
    /// Opaque black.
    pub const BLACK: Srgb8 = Srgb8::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Srgb8 = Srgb8::new(255, 255, 255);

    /// Creates a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xAARRGGBB` value, ignoring alpha.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }

    /// Packs the color as opaque `0xFFRRGGBB`, the layout platform color
    /// types expect.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Converts back to normalized gamma-encoded channels.
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Srgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Srgb8 {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Srgb8> for [u8; 3] {
    #[inline]
    fn from(color: Srgb8) -> Self {
        [color.r, color.g, color.b]
    }
}

impl Color for Srgb8 {
    fn to_linear_srgb(&self) -> LinearSrgb {
        Srgb8::to_srgb(*self).to_linear()
    }

    fn to_display_color(&self) -> Srgb8 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_round_trip_within_tolerance() {
        for step in 0..=100 {
            let v = f64::from(step) / 100.0;
            let linear = LinearSrgb::new(v, 1.0 - v, v * v);
            let back = linear.to_srgb().to_linear();
            assert!((back.r - linear.r).abs() < 1e-4);
            assert!((back.g - linear.g).abs() < 1e-4);
            assert!((back.b - linear.b).abs() < 1e-4);
        }
    }

    #[test]
    fn out_of_gamut_channels_are_clamped() {
        let srgb = LinearSrgb::new(-0.3, 1.7, 0.5).to_srgb();
        assert_eq!(srgb.r, 0.0);
        assert!((srgb.g - 1.0).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&srgb.b));
        assert!(!LinearSrgb::new(-0.3, 1.7, 0.5).is_in_gamut());
        assert!(LinearSrgb::new(0.0, 0.5, 1.0).is_in_gamut());
    }

    #[test]
    fn quantize_rounds_to_nearest() {
        let srgb = Srgb::new(0.0, 0.5, 1.0);
        assert_eq!(srgb.quantize(8), Ok([0, 128, 255]));
        assert_eq!(srgb.quantize(1), Ok([0, 1, 1]));
        assert_eq!(srgb.quantize(10), Ok([0, 512, 1023]));
        assert_eq!(srgb.quantize8(), Srgb8::new(0, 128, 255));
    }

    #[test]
    fn quantize_rejects_unsupported_depths() {
        let srgb = Srgb::new(0.1, 0.2, 0.3);
        assert_eq!(srgb.quantize(0), Err(Error::UnsupportedBitDepth(0)));
        assert_eq!(srgb.quantize(17), Err(Error::UnsupportedBitDepth(17)));
    }

    #[test]
    fn argb_packing() {
        let color = Srgb8::new(0x12, 0xab, 0xef);
        assert_eq!(color.to_argb(), 0xFF12_ABEF);
        assert_eq!(Srgb8::from_argb(0x8012_ABEF), color);
        assert_eq!(color.to_hex(), "#12abef");
    }

    #[test]
    fn luminance_of_primaries() {
        assert!((LinearSrgb::new(1.0, 1.0, 1.0).relative_luminance() - 1.0).abs() < 1e-12);
        assert_eq!(LinearSrgb::new(0.0, 0.0, 0.0).relative_luminance(), 0.0);
        assert!(
            LinearSrgb::new(0.0, 1.0, 0.0).relative_luminance()
                > LinearSrgb::new(1.0, 0.0, 0.0).relative_luminance()
        );
    }
}
