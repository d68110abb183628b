use super::{Color, LinearSrgb, Oklch, normalize_hue};

// Linear sRGB -> LMS cone response.
const SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.412_221_470_8, 0.536_332_536_3, 0.051_445_992_9],
    [0.211_903_498_2, 0.680_699_545_1, 0.107_396_956_6],
    [0.088_302_461_9, 0.281_718_837_6, 0.629_978_700_5],
];

// Non-linear LMS -> Lab.
const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.210_454_255_3, 0.793_617_785_0, -0.004_072_046_8],
    [1.977_998_495_1, -2.428_592_205_0, 0.450_593_709_9],
    [0.025_904_037_1, 0.782_771_766_2, -0.808_675_766_0],
];

// Lab -> non-linear LMS.
const LAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.396_337_777_4, 0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
];

// LMS -> linear sRGB.
const LMS_TO_SRGB: [[f64; 3]; 3] = [
    [4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2],
    [-1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], [x, y, z]: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * x + m[0][1] * y + m[0][2] * z,
        m[1][0] * x + m[1][1] * y + m[1][2] * z,
        m[2][0] * x + m[2][1] * y + m[2][2] * z,
    ]
}

/// A color in the rectangular Oklab space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Perceptual lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl Oklab {
    /// Creates a color from its Oklab coordinates.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts to cylindrical Oklch with the hue in `[0, 360)`.
    pub fn to_oklch(self) -> Oklch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let h = normalize_hue(self.b.atan2(self.a).to_degrees());
        Oklch::new(self.l, c, h)
    }

    /// Converts to linear sRGB. Out-of-gamut results are returned unclamped.
    pub fn to_linear_srgb(self) -> LinearSrgb {
        let [l, m, s] = mul(&LAB_TO_LMS, [self.l, self.a, self.b]);
        let [r, g, b] = mul(&LMS_TO_SRGB, [l * l * l, m * m * m, s * s * s]);
        LinearSrgb::new(r, g, b)
    }
}

impl Color for Oklab {
    fn to_linear_srgb(&self) -> LinearSrgb {
        Oklab::to_linear_srgb(*self)
    }
}

impl From<LinearSrgb> for Oklab {
    fn from(rgb: LinearSrgb) -> Self {
        let [l, m, s] = mul(&SRGB_TO_LMS, [rgb.r, rgb.g, rgb.b]);
        let [l, a, b] = mul(&LMS_TO_LAB, [l.cbrt(), m.cbrt(), s.cbrt()]);
        Oklab::new(l, a, b)
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        lch.to_oklab()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn white_is_achromatic() {
        let lab = Oklab::from(LinearSrgb::new(1.0, 1.0, 1.0));
        assert_close(lab.l, 1.0, 1e-4);
        assert_close(lab.a, 0.0, 1e-4);
        assert_close(lab.b, 0.0, 1e-4);
    }

    #[test]
    fn srgb_red_matches_reference_values() {
        let lab = Oklab::from(LinearSrgb::new(1.0, 0.0, 0.0));
        assert_close(lab.l, 0.627_955, 1e-4);
        assert_close(lab.a, 0.224_863, 1e-4);
        assert_close(lab.b, 0.125_846, 1e-4);
    }

    #[test]
    fn linear_round_trip() {
        let rgb = LinearSrgb::new(0.2, 0.5, 0.8);
        let back = Oklab::from(rgb).to_linear_srgb();
        assert_close(back.r, rgb.r, 1e-6);
        assert_close(back.g, rgb.g, 1e-6);
        assert_close(back.b, rgb.b, 1e-6);
    }

    #[test]
    fn black_maps_to_origin() {
        let rgb = Oklab::new(0.0, 0.0, 0.0).to_linear_srgb();
        assert_eq!((rgb.r, rgb.g, rgb.b), (0.0, 0.0, 0.0));
    }
}
