//! Target catalog describing how each color role derives from the seed.
//!
//! A [`Target`] fixes, for one [`Role`], the lightness and chroma of every
//! shade it materializes, a hue offset from the seed, and the role whose
//! chroma acts as the scaling reference. A [`TargetCatalog`] is the validated,
//! read-only set of targets handed to the generator.
//!
//! [`TargetCatalog::material_you`] pins the built-in catalog: Oklab lightness
//! falling linearly from 1.0 at shade 0 to 0.0 at shade 1000, high chroma for
//! the accents, and a faint seed tint for the neutrals.

use std::{collections::HashSet, fmt, slice};

use smallvec::SmallVec;

use crate::{
    color::Oklch,
    error::{Error, Result},
    swatch::Shade,
};

/// Shade keys materialized by the built-in catalog, lightest first.
pub const MATERIAL_SHADES: [Shade; 13] = [
    0, 10, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000,
];

// Oklab lightness per shade.
const MATERIAL_LIGHTNESS: [f64; 13] = [
    1.0, 0.99, 0.95, 0.90, 0.80, 0.70, 0.60, 0.50, 0.40, 0.30, 0.20, 0.10, 0.0,
];

const ACCENT1_CHROMA: f64 = 0.1328;
const ACCENT2_CHROMA: f64 = 0.0379;
const ACCENT3_CHROMA: f64 = 0.0929;
const ACCENT3_HUE_SHIFT: f64 = 60.0;
const NEUTRAL1_CHROMA: f64 = 0.0132;
const NEUTRAL2_CHROMA: f64 = NEUTRAL1_CHROMA * 2.0;

/// A named color role in a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// Main accent, closest to the seed.
    Accent1,
    /// Muted accent.
    Accent2,
    /// Accent with a shifted hue.
    Accent3,
    /// Main background tone, lightly tinted with the seed.
    Neutral1,
    /// Secondary background tone, tinted slightly more.
    Neutral2,
}

impl Role {
    /// Every role, in catalog order.
    pub const ALL: [Role; 5] = [
        Role::Accent1,
        Role::Accent2,
        Role::Accent3,
        Role::Neutral1,
        Role::Neutral2,
    ];

    /// Stable lowercase name of the role.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Accent1 => "accent1",
            Role::Accent2 => "accent2",
            Role::Accent3 => "accent3",
            Role::Neutral1 => "neutral1",
            Role::Neutral2 => "neutral2",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derivation rule for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    role: Role,
    reference: Role,
    hue_shift: f64,
    shades: SmallVec<[(Shade, Oklch); 16]>,
}

impl Target {
    /// Creates a target.
    ///
    /// `shades` gives the target lightness and chroma per shade; the hue of
    /// each entry is ignored because the generator takes it from the seed.
    /// `reference` names the role whose chroma at the same shade bounds the
    /// seed chroma, and `hue_shift` is added to the seed hue in degrees.
    pub fn new(
        role: Role,
        reference: Role,
        hue_shift: f64,
        shades: impl IntoIterator<Item = (Shade, Oklch)>,
    ) -> Self {
        let mut shades: SmallVec<[(Shade, Oklch); 16]> = shades.into_iter().collect();
        shades.sort_by_key(|(shade, _)| *shade);
        Self {
            role,
            reference,
            hue_shift,
            shades,
        }
    }

    /// Role this target produces.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Role whose chroma scales the seed chroma.
    pub fn reference(&self) -> Role {
        self.reference
    }

    /// Hue offset from the seed in degrees.
    pub fn hue_shift(&self) -> f64 {
        self.hue_shift
    }

    /// Target color for `shade`, if declared.
    pub fn get(&self, shade: Shade) -> Option<Oklch> {
        self.shades
            .binary_search_by_key(&shade, |(key, _)| *key)
            .ok()
            .map(|index| self.shades[index].1)
    }

    /// Declared shades in ascending order.
    pub fn shades(&self) -> impl Iterator<Item = Shade> + '_ {
        self.shades.iter().map(|(shade, _)| *shade)
    }

    /// `(shade, target color)` pairs in ascending shade order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Oklch)> + '_ {
        self.shades.iter().copied()
    }

    /// Number of declared shades.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Whether the target declares no shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.shades.windows(2).any(|pair| pair[0].0 == pair[1].0) {
            return Err(Error::InvalidCatalog(format!(
                "{} declares a shade more than once",
                self.role
            )));
        }
        if !self.hue_shift.is_finite() {
            return Err(Error::InvalidCatalog(format!(
                "{} has a non-finite hue shift",
                self.role
            )));
        }
        for (_, color) in self.iter() {
            color.validate()?;
        }
        Ok(())
    }
}

/// Validated, read-only set of targets.
///
/// Every reference role exists and declares every shade of the targets that
/// point at it, so generation never meets a missing reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCatalog {
    targets: Vec<Target>,
}

impl TargetCatalog {
    /// Validates and wraps a list of targets.
    pub fn new(targets: Vec<Target>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(targets.len());
        for target in &targets {
            if !seen.insert(target.role) {
                return Err(Error::InvalidCatalog(format!(
                    "{} is declared more than once",
                    target.role
                )));
            }
            target.validate()?;
        }

        for target in &targets {
            let Some(reference) = targets.iter().find(|t| t.role == target.reference) else {
                return Err(Error::InvalidCatalog(format!(
                    "{} references missing role {}",
                    target.role, target.reference
                )));
            };
            if let Some(shade) = target.shades().find(|shade| reference.get(*shade).is_none()) {
                return Err(Error::InvalidCatalog(format!(
                    "reference {} lacks shade {shade} required by {}",
                    reference.role, target.role
                )));
            }
        }

        Ok(Self { targets })
    }

    /// The built-in Material You catalog.
    pub fn material_you() -> Self {
        Self {
            targets: material_you_targets(1.0),
        }
    }

    /// The built-in catalog with every target chroma multiplied by
    /// `chroma_factor`.
    pub fn material_you_with_chroma_factor(chroma_factor: f64) -> Result<Self> {
        if !chroma_factor.is_finite() || chroma_factor < 0.0 {
            return Err(Error::InvalidCatalog(format!(
                "chroma factor {chroma_factor} must be finite and not negative"
            )));
        }
        Self::new(material_you_targets(chroma_factor))
    }

    /// Target for `role`, if the catalog defines it.
    pub fn target(&self, role: Role) -> Option<&Target> {
        self.targets.iter().find(|target| target.role == role)
    }

    /// Roles in catalog order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.targets.iter().map(Target::role)
    }

    /// Targets in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, Target> {
        self.targets.iter()
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the catalog has no roles.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Total number of role/shade pairs.
    pub fn shade_count(&self) -> usize {
        self.targets.iter().map(Target::len).sum()
    }
}

impl Default for TargetCatalog {
    fn default() -> Self {
        Self::material_you()
    }
}

impl<'a> IntoIterator for &'a TargetCatalog {
    type Item = &'a Target;
    type IntoIter = slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn material_shades(chroma: f64) -> impl Iterator<Item = (Shade, Oklch)> {
    MATERIAL_SHADES
        .into_iter()
        .zip(MATERIAL_LIGHTNESS)
        .map(move |(shade, lightness)| {
            // White and black stay achromatic.
            let chroma = if lightness == 0.0 || lightness == 1.0 {
                0.0
            } else {
                chroma
            };
            (shade, Oklch::new(lightness, chroma, 0.0))
        })
}

fn material_you_targets(chroma_factor: f64) -> Vec<Target> {
    vec![
        Target::new(
            Role::Accent1,
            Role::Accent1,
            0.0,
            material_shades(ACCENT1_CHROMA * chroma_factor),
        ),
        Target::new(
            Role::Accent2,
            Role::Accent1,
            0.0,
            material_shades(ACCENT2_CHROMA * chroma_factor),
        ),
        Target::new(
            Role::Accent3,
            Role::Accent1,
            ACCENT3_HUE_SHIFT,
            material_shades(ACCENT3_CHROMA * chroma_factor),
        ),
        Target::new(
            Role::Neutral1,
            Role::Neutral1,
            0.0,
            material_shades(NEUTRAL1_CHROMA * chroma_factor),
        ),
        Target::new(
            Role::Neutral2,
            Role::Neutral1,
            0.0,
            material_shades(NEUTRAL2_CHROMA * chroma_factor),
        ),
    ]
}
