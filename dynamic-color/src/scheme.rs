//! Scheme generation from a seed color.
//!
//! For every role in a [`TargetCatalog`] and every shade that role declares,
//! the generator keeps the target lightness, scales the target chroma by how
//! much of the reference chroma the seed can supply, and takes the hue from
//! the seed (plus the role's hue shift). Each shade is computed on its own,
//! so the same seed and catalog always give bit-identical output.
//!
//! # Example
//!
//! ```
//! use dynamic_color::{ColorScheme, Oklch, TargetCatalog};
//!
//! let catalog = TargetCatalog::material_you();
//! let scheme = ColorScheme::new(Oklch::new(1.0, 0.2, 180.0), &catalog)?;
//! let primary = scheme.accent1()?.get(600)?;
//! assert!((0.0..=1.0).contains(&primary.g));
//! # Ok::<(), dynamic_color::Error>(())
//! ```

use smallvec::SmallVec;
use tracing::trace;

use crate::{
    color::{Color, Oklch, Srgb, Srgb8, normalize_hue},
    error::{Error, Result},
    swatch::{ColorSwatch, Shade, ShadeCache},
    target::{Role, Target, TargetCatalog},
};

/// Swatches for every role of a catalog, derived from one seed.
///
/// Immutable after construction. The shade cache lives and dies with the
/// instance; clones start with an empty cache and equality ignores it.
#[derive(Debug)]
pub struct ColorScheme {
    seed: Oklch,
    swatches: Vec<ColorSwatch>,
    cache: ShadeCache,
}

impl ColorScheme {
    /// Generates a scheme; see [`generate_scheme`].
    pub fn new(seed: Oklch, targets: &TargetCatalog) -> Result<Self> {
        generate_scheme(seed, targets)
    }

    /// The validated seed, with its hue wrapped into `[0, 360)`.
    pub fn seed(&self) -> Oklch {
        self.seed
    }

    /// Swatch for `role`.
    pub fn swatch(&self, role: Role) -> Result<&ColorSwatch> {
        self.swatches
            .iter()
            .find(|swatch| swatch.role() == role)
            .ok_or(Error::RoleNotFound(role))
    }

    /// Main accent swatch.
    pub fn accent1(&self) -> Result<&ColorSwatch> {
        self.swatch(Role::Accent1)
    }

    /// Muted accent swatch.
    pub fn accent2(&self) -> Result<&ColorSwatch> {
        self.swatch(Role::Accent2)
    }

    /// Hue-shifted accent swatch.
    pub fn accent3(&self) -> Result<&ColorSwatch> {
        self.swatch(Role::Accent3)
    }

    /// Main neutral swatch.
    pub fn neutral1(&self) -> Result<&ColorSwatch> {
        self.swatch(Role::Neutral1)
    }

    /// Secondary neutral swatch.
    pub fn neutral2(&self) -> Result<&ColorSwatch> {
        self.swatch(Role::Neutral2)
    }

    /// Gamma-encoded color at `(role, shade)`.
    pub fn get(&self, role: Role, shade: Shade) -> Result<Srgb> {
        self.swatch(role)?.get(shade)
    }

    /// 8-bit display color at `(role, shade)`, memoized per scheme.
    pub fn shade(&self, role: Role, shade: Shade) -> Result<Srgb8> {
        self.cache
            .get_or_try_insert(role, shade, || Ok(self.get(role, shade)?.quantize8()))
    }

    /// Swatches in catalog order.
    pub fn swatches(&self) -> impl Iterator<Item = &ColorSwatch> + '_ {
        self.swatches.iter()
    }

    /// Roles in catalog order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.swatches.iter().map(ColorSwatch::role)
    }

    /// Number of display colors memoized so far.
    pub fn cached_shades(&self) -> usize {
        self.cache.len()
    }
}

impl Clone for ColorScheme {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            swatches: self.swatches.clone(),
            cache: ShadeCache::with_capacity(self.cache.capacity()),
        }
    }
}

impl PartialEq for ColorScheme {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed && self.swatches == other.swatches
    }
}

/// Builds a complete [`ColorScheme`] from `seed` and `targets`.
///
/// The seed may be any color inside the Oklch domain: lightness in `[0, 1]`,
/// non-negative chroma, finite components. Anything else fails with
/// [`Error::InvalidColor`] before any swatch is computed. Generation is
/// all-or-nothing; no partial scheme is ever returned.
#[tracing::instrument(level = "debug", skip(targets), fields(roles = targets.len()))]
pub fn generate_scheme(seed: Oklch, targets: &TargetCatalog) -> Result<ColorScheme> {
    let seed = seed.validate()?.normalized();
    let swatches = targets
        .iter()
        .map(|target| transform_swatch(seed, target, targets))
        .collect::<Result<Vec<_>>>()?;

    Ok(ColorScheme {
        seed,
        swatches,
        cache: ShadeCache::with_capacity(targets.shade_count()),
    })
}

fn transform_swatch(
    seed: Oklch,
    target: &Target,
    catalog: &TargetCatalog,
) -> Result<ColorSwatch> {
    let reference = catalog.target(target.reference()).ok_or_else(|| {
        Error::InvalidCatalog(format!(
            "{} references missing role {}",
            target.role(),
            target.reference()
        ))
    })?;
    let hue = normalize_hue(seed.h + target.hue_shift());

    let shades = target
        .iter()
        .map(|(shade, color)| -> Result<(Shade, Srgb)> {
            let reference_chroma =
                reference
                    .get(shade)
                    .map(|c| c.c)
                    .ok_or(Error::NotFound {
                        role: reference.role(),
                        shade,
                    })?;
            Ok((shade, transform_color(color, seed.c, reference_chroma, hue)?))
        })
        .collect::<Result<SmallVec<[(Shade, Srgb); 16]>>>()?;

    trace!(role = %target.role(), hue, shades = shades.len(), "generated swatch");
    Ok(ColorSwatch::new(target.role(), shades))
}

fn transform_color(
    target: Oklch,
    seed_chroma: f64,
    reference_chroma: f64,
    hue: f64,
) -> Result<Srgb> {
    // Scale by the reference so chroma ratios between roles survive, and so a
    // gray seed produces a gray scheme.
    let scale = if reference_chroma == 0.0 {
        0.0
    } else {
        seed_chroma.clamp(0.0, reference_chroma) / reference_chroma
    };
    let color = Oklch::new(target.l, target.c * scale, hue);

    let linear = color.to_linear_srgb();
    if !linear.is_finite() {
        return Err(Error::InvalidColor {
            color,
            reason: "conversion produced a non-finite value",
        });
    }
    Ok(linear.to_srgb())
}
