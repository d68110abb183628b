//! Material color slots derived from a dynamic color scheme.
//!
//! ## Usage
//!
//! Build a [`DynamicTheme`] once, then ask it for [`MaterialColors`] whenever
//! the seed hue changes.

use dynamic_color::{ColorScheme, Oklch, Result, Role, Srgb8, TargetCatalog};

/// Material color slots for one light or dark theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialColors {
    /// The primary color of the theme.
    pub primary: Color,
    /// A variant of the primary color.
    pub primary_variant: Color,
    /// The secondary color of the theme.
    pub secondary: Color,
    /// A variant of the secondary color.
    pub secondary_variant: Color,
    /// The background color.
    pub background: Color,
    /// The surface color.
    pub surface: Color,
    /// The error color.
    pub error: Color,
    /// Color used for content on top of `primary`.
    pub on_primary: Color,
    /// Color used for content on top of `secondary`.
    pub on_secondary: Color,
    /// Color used for content on top of `background`.
    pub on_background: Color,
    /// Color used for content on top of `surface`.
    pub on_surface: Color,
    /// Color used for content on top of `error`.
    pub on_error: Color,
    /// Indicates if the colors are for a light (`true`) or dark (`false`)
    /// theme.
    pub is_light: bool,
}

/// Display color type used by the Material slots.
pub type Color = Srgb8;

impl MaterialColors {
    /// Picks the Material slots out of `scheme`.
    ///
    /// Fails with `NotFound` or `RoleNotFound` when the scheme was generated
    /// from a catalog that lacks one of the accent/neutral roles or shades
    /// used here.
    pub fn from_scheme(scheme: &ColorScheme, is_light: bool) -> Result<Self> {
        let shade = |role, level| scheme.shade(role, level);

        if is_light {
            Ok(Self {
                primary: shade(Role::Accent1, 600)?,
                primary_variant: shade(Role::Accent1, 600)?,
                secondary: shade(Role::Accent3, 600)?,
                secondary_variant: shade(Role::Accent3, 600)?,
                background: shade(Role::Neutral1, 50)?,
                surface: shade(Role::Neutral1, 100)?,
                error: shade(Role::Accent3, 600)?,
                on_primary: shade(Role::Neutral1, 900)?,
                on_secondary: shade(Role::Neutral2, 700)?,
                on_background: shade(Role::Neutral1, 900)?,
                on_surface: shade(Role::Neutral1, 900)?,
                on_error: shade(Role::Neutral1, 900)?,
                is_light,
            })
        } else {
            Ok(Self {
                primary: shade(Role::Accent1, 100)?,
                primary_variant: shade(Role::Accent1, 100)?,
                secondary: shade(Role::Accent3, 100)?,
                secondary_variant: shade(Role::Accent3, 100)?,
                background: shade(Role::Neutral1, 900)?,
                surface: shade(Role::Neutral1, 700)?,
                error: shade(Role::Accent3, 100)?,
                on_primary: shade(Role::Neutral1, 50)?,
                on_secondary: shade(Role::Neutral2, 50)?,
                on_background: shade(Role::Neutral1, 50)?,
                on_surface: shade(Role::Neutral1, 0)?,
                on_error: shade(Role::Neutral1, 50)?,
                is_light,
            })
        }
    }

    /// Returns the matching content color for a background color in this
    /// theme.
    ///
    /// When the background color does not match a known slot, this returns
    /// `None`.
    pub fn content_color_for(&self, background: Color) -> Option<Color> {
        if background == self.primary || background == self.primary_variant {
            Some(self.on_primary)
        } else if background == self.secondary || background == self.secondary_variant {
            Some(self.on_secondary)
        } else if background == self.background {
            Some(self.on_background)
        } else if background == self.surface {
            Some(self.on_surface)
        } else if background == self.error {
            Some(self.on_error)
        } else {
            None
        }
    }
}

/// Seed settings plus the catalog used to regenerate schemes.
///
/// Only the hue changes between regenerations; lightness and chroma stay at
/// the values given here.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicTheme {
    catalog: TargetCatalog,
    seed_lightness: f64,
    seed_chroma: f64,
}

impl DynamicTheme {
    /// Seed lightness used by [`DynamicTheme::new`].
    pub const SEED_LIGHTNESS: f64 = 1.0;
    /// Seed chroma used by [`DynamicTheme::new`].
    pub const SEED_CHROMA: f64 = 0.2;

    /// Creates a theme over `catalog` with the default seed lightness and
    /// chroma.
    pub fn new(catalog: TargetCatalog) -> Self {
        Self {
            catalog,
            seed_lightness: Self::SEED_LIGHTNESS,
            seed_chroma: Self::SEED_CHROMA,
        }
    }

    /// Creates a theme with explicit seed lightness and chroma.
    pub fn with_seed(catalog: TargetCatalog, lightness: f64, chroma: f64) -> Result<Self> {
        Oklch::new(lightness, chroma, 0.0).validate()?;
        Ok(Self {
            catalog,
            seed_lightness: lightness,
            seed_chroma: chroma,
        })
    }

    /// The target catalog.
    pub fn catalog(&self) -> &TargetCatalog {
        &self.catalog
    }

    /// Seed color for `hue` in degrees.
    pub fn seed_for_hue(&self, hue: f64) -> Oklch {
        Oklch::new(self.seed_lightness, self.seed_chroma, hue)
    }

    /// Generates the full scheme for `hue`.
    pub fn scheme_for_hue(&self, hue: f64) -> Result<ColorScheme> {
        ColorScheme::new(self.seed_for_hue(hue), &self.catalog)
    }

    /// Generates the Material slots for `hue`.
    pub fn colors_for_hue(&self, hue: f64, is_dark: bool) -> Result<MaterialColors> {
        MaterialColors::from_scheme(&self.scheme_for_hue(hue)?, !is_dark)
    }
}

impl Default for DynamicTheme {
    fn default() -> Self {
        Self::new(TargetCatalog::material_you())
    }
}
