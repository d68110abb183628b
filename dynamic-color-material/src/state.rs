//! Observable container for the current Material colors.
//!
//! ## Usage
//!
//! Share one [`ThemeState`] between the code that regenerates schemes and the
//! UI that reads colors. Each regeneration produces a fresh, immutable
//! scheme; its slots are copied into the container and the generation counter
//! moves forward so readers can tell something changed.

use std::sync::Arc;

use dynamic_color::Result;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::theme::{DynamicTheme, MaterialColors};

struct ThemeSlot {
    colors: MaterialColors,
    generation: u64,
}

/// Shared handle to the current Material colors.
///
/// Clones point at the same container.
#[derive(Clone)]
pub struct ThemeState {
    slot: Arc<RwLock<ThemeSlot>>,
}

impl ThemeState {
    /// Creates a container holding `colors` at generation zero.
    pub fn new(colors: MaterialColors) -> Self {
        Self {
            slot: Arc::new(RwLock::new(ThemeSlot {
                colors,
                generation: 0,
            })),
        }
    }

    /// Creates a container from the theme's colors at `hue`.
    pub fn from_theme(theme: &DynamicTheme, hue: f64, is_dark: bool) -> Result<Self> {
        Ok(Self::new(theme.colors_for_hue(hue, is_dark)?))
    }

    /// Copies `colors` into the container and returns the new generation.
    pub fn apply(&self, colors: MaterialColors) -> u64 {
        let mut slot = self.slot.write();
        slot.colors = colors;
        slot.generation += 1;
        debug!(generation = slot.generation, "applied theme colors");
        slot.generation
    }

    /// Regenerates colors for `hue` and applies them.
    ///
    /// On failure the container keeps its previous colors and generation.
    pub fn regenerate(&self, theme: &DynamicTheme, hue: f64, is_dark: bool) -> Result<u64> {
        match theme.colors_for_hue(hue, is_dark) {
            Ok(colors) => Ok(self.apply(colors)),
            Err(err) => {
                warn!("Failed to regenerate theme colors for hue {hue}: {err}");
                Err(err)
            }
        }
    }

    /// Copy of the current colors.
    pub fn snapshot(&self) -> MaterialColors {
        self.slot.read().colors
    }

    /// Runs `f` against the current colors without copying them.
    pub fn with<R>(&self, f: impl FnOnce(&MaterialColors) -> R) -> R {
        f(&self.slot.read().colors)
    }

    /// Current generation and colors, read together.
    pub fn current(&self) -> (u64, MaterialColors) {
        let slot = self.slot.read();
        (slot.generation, slot.colors)
    }

    /// Number of updates applied so far.
    pub fn generation(&self) -> u64 {
        self.slot.read().generation
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.read();
        f.debug_struct("ThemeState")
            .field("colors", &slot.colors)
            .field("generation", &slot.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, thread};

    use dynamic_color::{Oklch, Role, Target, TargetCatalog};

    use super::*;

    fn state(theme: &DynamicTheme) -> ThemeState {
        ThemeState::from_theme(theme, 0.0, false).expect("valid seed")
    }

    #[test]
    fn apply_copies_values_and_bumps_generation() {
        let theme = DynamicTheme::default();
        let state = state(&theme);
        assert_eq!(state.generation(), 0);

        let next = theme.colors_for_hue(120.0, false).expect("valid seed");
        assert_eq!(state.apply(next), 1);
        assert_eq!(state.snapshot(), next);
        assert_eq!(state.with(|colors| colors.primary), next.primary);
    }

    #[test]
    fn clones_share_the_container() {
        let theme = DynamicTheme::default();
        let writer = state(&theme);
        let reader = writer.clone();

        writer.regenerate(&theme, 240.0, true).expect("valid seed");
        assert_eq!(reader.generation(), 1);
        assert!(!reader.snapshot().is_light);
    }

    #[test]
    fn failed_regeneration_keeps_previous_colors() {
        let theme = DynamicTheme::default();
        let state = state(&theme);
        let before = state.snapshot();

        let incomplete = DynamicTheme::new(
            TargetCatalog::new(vec![Target::new(
                Role::Neutral1,
                Role::Neutral1,
                0.0,
                [(50, Oklch::new(0.95, 0.01, 0.0))],
            )])
            .expect("valid catalog"),
        );
        assert!(state.regenerate(&incomplete, 90.0, false).is_err());
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn reader_sees_every_tick_in_order() {
        let theme = DynamicTheme::default();
        let state = state(&theme);
        let reader = state.clone();
        let (tx, rx) = mpsc::channel();

        let writer = thread::spawn(move || {
            for tick in 0..10 {
                let hue = f64::from(tick) * 36.0;
                let generation = state.regenerate(&theme, hue, false).expect("valid seed");
                tx.send((generation, hue)).expect("reader alive");
            }
        });

        let expected_theme = DynamicTheme::default();
        for (generation, hue) in rx {
            let (current, colors) = reader.current();
            assert!(current >= generation);
            if current == generation {
                let expected = expected_theme.colors_for_hue(hue, false).expect("valid seed");
                assert_eq!(colors, expected);
            }
        }
        writer.join().expect("writer finished");
        assert_eq!(reader.generation(), 10);
    }
}
