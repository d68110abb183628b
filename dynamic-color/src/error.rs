//! Error types shared by the color model, target catalog and scheme generator.

use thiserror::Error;

use crate::{color::Oklch, target::Role, swatch::Shade};

/// Errors produced while validating colors, building catalogs or resolving
/// shades.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A color lies outside the defined domain of the perceptual model.
    ///
    /// Raised for seeds with negative chroma, lightness outside `[0, 1]`, or
    /// non-finite components, and for intermediate results that stop being
    /// finite during generation.
    #[error("invalid color {color:?}: {reason}")]
    InvalidColor {
        /// The offending color.
        color: Oklch,
        /// Which constraint was violated.
        reason: &'static str,
    },
    /// A shade was requested that the swatch does not define.
    ///
    /// This signals a mismatch between the target catalog and its consumer.
    #[error("shade {shade} is not defined for {role}")]
    NotFound {
        /// Role of the swatch that was queried.
        role: Role,
        /// The missing shade.
        shade: Shade,
    },
    /// The swatch for a role is not part of the scheme.
    #[error("role {0} is not part of this color scheme")]
    RoleNotFound(Role),
    /// Quantization was requested with a bit depth outside `1..=16`.
    #[error("unsupported bit depth {0}, expected 1..=16")]
    UnsupportedBitDepth(u8),
    /// A target catalog failed validation.
    #[error("invalid target catalog: {0}")]
    InvalidCatalog(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
