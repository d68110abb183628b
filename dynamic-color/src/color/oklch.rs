use super::{Color, LinearSrgb, Oklab};
use crate::error::{Error, Result};

/// A color in the cylindrical Oklch space.
///
/// `l` is perceptual lightness in `[0, 1]`, `c` is chroma (unbounded above,
/// never negative) and `h` is the hue angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Perceptual lightness.
    pub l: f64,
    /// Chroma.
    pub c: f64,
    /// Hue angle in degrees.
    pub h: f64,
}

impl Oklch {
    /// Creates a color from lightness, chroma and hue.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Returns the same color with its hue wrapped into `[0, 360)`.
    ///
    /// `0.0`, `360.0` and `-0.0` all map to the same bit pattern.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            ..self
        }
    }

    /// Returns the color rotated by `degrees`, with the hue wrapped.
    #[inline]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Checks that the color lies inside the domain of the model.
    pub fn validate(self) -> Result<Self> {
        let reason = if !(self.l.is_finite() && self.c.is_finite() && self.h.is_finite()) {
            "components must be finite"
        } else if !(0.0..=1.0).contains(&self.l) {
            "lightness must be within [0, 1]"
        } else if self.c < 0.0 {
            "chroma must not be negative"
        } else {
            return Ok(self);
        };

        Err(Error::InvalidColor { color: self, reason })
    }

    /// Converts to rectangular Oklab coordinates.
    pub fn to_oklab(self) -> Oklab {
        let radians = self.h.to_radians();
        Oklab::new(self.l, self.c * radians.cos(), self.c * radians.sin())
    }
}

impl Color for Oklch {
    fn to_linear_srgb(&self) -> LinearSrgb {
        self.to_oklab().to_linear_srgb()
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        lab.to_oklch()
    }
}

/// Wraps a hue angle into `[0, 360)`.
pub fn normalize_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        // Adding 0.0 turns -0.0 into 0.0.
        wrapped + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_to_the_same_bits() {
        assert_eq!(normalize_hue(360.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(normalize_hue(-0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(normalize_hue(720.0 + 45.0), 45.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
    }

    #[test]
    fn rotate_hue_wraps() {
        let rotated = Oklch::new(0.5, 0.1, 330.0).rotate_hue(60.0);
        assert!((rotated.h - 30.0).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_out_of_domain_colors() {
        assert!(Oklch::new(1.0, 0.2, 180.0).validate().is_ok());
        assert!(Oklch::new(0.0, 0.0, -720.0).validate().is_ok());

        let negative_chroma = Oklch::new(0.5, -0.1, 0.0).validate();
        assert!(matches!(
            negative_chroma,
            Err(Error::InvalidColor {
                reason: "chroma must not be negative",
                ..
            })
        ));
        assert!(Oklch::new(-0.01, 0.1, 0.0).validate().is_err());
        assert!(Oklch::new(1.01, 0.1, 0.0).validate().is_err());
        assert!(Oklch::new(0.5, f64::NAN, 0.0).validate().is_err());
        assert!(Oklch::new(0.5, 0.1, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn zero_chroma_is_gray() {
        let lab = Oklch::new(0.7, 0.0, 123.0).to_oklab();
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, 0.0);
    }

    #[test]
    fn oklab_round_trip() {
        let lch = Oklch::new(0.62, 0.14, 250.0);
        let back = lch.to_oklab().to_oklch();
        assert!((back.l - lch.l).abs() < 1e-12);
        assert!((back.c - lch.c).abs() < 1e-12);
        assert!((back.h - lch.h).abs() < 1e-9);
    }
}
