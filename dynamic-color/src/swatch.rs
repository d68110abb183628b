//! Tonal swatches and shade lookup.
//!
//! A [`ColorSwatch`] holds the display colors of one role keyed by shade.
//! Lookups of shades the swatch never declared fail with
//! [`Error::NotFound`](crate::Error::NotFound) rather than falling back to a
//! default, since that always points at a catalog/consumer mismatch.

use std::{fmt, num::NonZeroUsize};

use lru::LruCache;
use parking_lot::Mutex;
use smallvec::SmallVec;

use crate::{
    color::{Srgb, Srgb8},
    error::{Error, Result},
    target::Role,
};

/// Lightness tier within a swatch, `0` (lightest) to `1000` (darkest).
pub type Shade = u16;

/// Display colors of one role, keyed by shade.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSwatch {
    role: Role,
    shades: SmallVec<[(Shade, Srgb); 16]>,
}

impl ColorSwatch {
    /// `shades` must be sorted by shade with no duplicates.
    pub(crate) fn new(role: Role, shades: SmallVec<[(Shade, Srgb); 16]>) -> Self {
        debug_assert!(shades.windows(2).all(|pair| pair[0].0 < pair[1].0));
        Self { role, shades }
    }

    /// Role this swatch belongs to.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Gamma-encoded color for `shade`.
    pub fn get(&self, shade: Shade) -> Result<Srgb> {
        self.shades
            .binary_search_by_key(&shade, |(key, _)| *key)
            .map(|index| self.shades[index].1)
            .map_err(|_| Error::NotFound {
                role: self.role,
                shade,
            })
    }

    /// Whether `shade` is defined.
    pub fn contains(&self, shade: Shade) -> bool {
        self.get(shade).is_ok()
    }

    /// Defined shades in ascending order.
    pub fn shades(&self) -> impl Iterator<Item = Shade> + '_ {
        self.shades.iter().map(|(shade, _)| *shade)
    }

    /// `(shade, color)` pairs in ascending shade order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Srgb)> + '_ {
        self.shades.iter().copied()
    }

    /// Number of defined shades.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Whether the swatch is empty.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

/// Resolves `level` in `swatch` to an 8-bit display color.
///
/// # Examples
///
/// ```
/// use dynamic_color::{Oklch, Role, TargetCatalog, generate_scheme, shade};
///
/// let scheme = generate_scheme(Oklch::new(1.0, 0.2, 180.0), &TargetCatalog::material_you())?;
/// let primary = shade(scheme.swatch(Role::Accent1)?, 600)?;
/// assert!(shade(scheme.swatch(Role::Accent1)?, 650).is_err());
/// # let _ = primary;
/// # Ok::<(), dynamic_color::Error>(())
/// ```
pub fn shade(swatch: &ColorSwatch, level: Shade) -> Result<Srgb8> {
    swatch.get(level).map(Srgb::quantize8)
}

/// Memoizes quantized shade lookups for a single scheme.
///
/// The cache is owned by the scheme that created it and dropped with it.
/// Lookups may come from several readers, so the map sits behind a mutex.
pub struct ShadeCache {
    entries: Mutex<LruCache<(Role, Shade), Srgb8>>,
}

impl ShadeCache {
    /// Creates a cache holding up to `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the cached color for `(role, shade)`, computing and storing it
    /// on a miss. Errors are never cached.
    pub fn get_or_try_insert(
        &self,
        role: Role,
        shade: Shade,
        compute: impl FnOnce() -> Result<Srgb8>,
    ) -> Result<Srgb8> {
        let mut entries = self.entries.lock();
        if let Some(color) = entries.get(&(role, shade)) {
            return Ok(*color);
        }
        let color = compute()?;
        entries.put((role, shade), color);
        Ok(color)
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    /// Drops every memoized entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl fmt::Debug for ShadeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.lock();
        f.debug_struct("ShadeCache")
            .field("len", &entries.len())
            .field("capacity", &entries.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn swatch() -> ColorSwatch {
        ColorSwatch::new(
            Role::Neutral1,
            smallvec![
                (0, Srgb::new(1.0, 1.0, 1.0)),
                (500, Srgb::new(0.5, 0.5, 0.5)),
                (1000, Srgb::new(0.0, 0.0, 0.0)),
            ],
        )
    }

    #[test]
    fn lookup_defined_shades() {
        let swatch = swatch();
        assert_eq!(swatch.get(500), Ok(Srgb::new(0.5, 0.5, 0.5)));
        assert_eq!(shade(&swatch, 0), Ok(Srgb8::WHITE));
        assert_eq!(shade(&swatch, 1000), Ok(Srgb8::BLACK));
        assert_eq!(swatch.shades().collect::<Vec<_>>(), vec![0, 500, 1000]);
        assert_eq!(swatch.len(), 3);
    }

    #[test]
    fn undefined_shade_is_not_found() {
        let swatch = swatch();
        assert_eq!(
            swatch.get(600),
            Err(Error::NotFound {
                role: Role::Neutral1,
                shade: 600
            })
        );
        assert!(!swatch.contains(600));
        assert!(shade(&swatch, 600).is_err());
    }

    #[test]
    fn cache_computes_once() {
        let cache = ShadeCache::with_capacity(4);
        let mut calls = 0;
        for _ in 0..3 {
            let color = cache.get_or_try_insert(Role::Accent1, 600, || {
                calls += 1;
                Ok(Srgb8::new(1, 2, 3))
            });
            assert_eq!(color, Ok(Srgb8::new(1, 2, 3)));
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_does_not_store_errors() {
        let cache = ShadeCache::with_capacity(4);
        let missing = cache.get_or_try_insert(Role::Accent1, 650, || {
            Err(Error::NotFound {
                role: Role::Accent1,
                shade: 650,
            })
        });
        assert!(missing.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_still_caches_one_entry() {
        let cache = ShadeCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
        let _ = cache.get_or_try_insert(Role::Accent1, 100, || Ok(Srgb8::WHITE));
        let _ = cache.get_or_try_insert(Role::Accent1, 200, || Ok(Srgb8::BLACK));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
