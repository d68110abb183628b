//! Prints dynamic Material colors while a simulated animation cycles the seed
//! hue, then dumps the full palette for one hue.

use std::time::Duration;

use dynamic_color::{ColorScheme, MATERIAL_SHADES};
use dynamic_color_material::{DynamicTheme, ThemeState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// One full trip around the hue wheel.
const HUE_PERIOD: Duration = Duration::from_secs(10);
const TICKS: u32 = 12;
const PALETTE_HUE: f64 = 180.0;

fn main() {
    init_tracing();

    let theme = DynamicTheme::default();
    for is_dark in [false, true] {
        if let Err(err) = run_cycle(&theme, is_dark) {
            error!("Theme cycle failed: {err}");
            std::process::exit(1);
        }
    }

    match theme.scheme_for_hue(PALETTE_HUE) {
        Ok(scheme) => print_palette(&scheme),
        Err(err) => {
            error!("Failed to generate palette: {err}");
            std::process::exit(1);
        }
    }
}

/// Linear hue ramp that restarts every [`HUE_PERIOD`].
fn hue_at(elapsed: Duration) -> f64 {
    let period = HUE_PERIOD.as_secs_f64();
    (elapsed.as_secs_f64() % period) / period * 360.0
}

fn run_cycle(theme: &DynamicTheme, is_dark: bool) -> dynamic_color::Result<()> {
    let state = ThemeState::from_theme(theme, hue_at(Duration::ZERO), is_dark)?;
    let step = HUE_PERIOD / TICKS;

    println!("{} theme", if is_dark { "dark" } else { "light" });
    for tick in 0..TICKS {
        let hue = hue_at(step * tick);
        // Single writer, single reader: the write lock orders each update
        // before the read that follows it.
        let generation = state.regenerate(theme, hue, is_dark)?;
        let colors = state.snapshot();
        println!(
            "  hue {hue:6.1}  primary {}  secondary {}  background {}  surface {}  text {}",
            colors.primary,
            colors.secondary,
            colors.background,
            colors.surface,
            colors.on_background,
        );
        info!(generation, hue, "theme updated");
    }
    Ok(())
}

fn print_palette(scheme: &ColorScheme) {
    println!("palette for hue {PALETTE_HUE}");
    print!("{:>9}", "");
    for shade in MATERIAL_SHADES {
        print!(" {shade:>7}");
    }
    println!();

    for swatch in scheme.swatches() {
        print!("{:>9}", swatch.role().name());
        for (_, color) in swatch.iter() {
            print!(" {}", color.quantize8());
        }
        println!();
    }
}

fn init_tracing() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new("error,dynamic_color=info,example=info") {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_ramp_restarts_each_period() {
        assert_eq!(hue_at(Duration::ZERO), 0.0);
        assert!((hue_at(Duration::from_millis(2500)) - 90.0).abs() < 1e-9);
        assert_eq!(hue_at(HUE_PERIOD), 0.0);
        assert!((hue_at(HUE_PERIOD + Duration::from_secs(5)) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn cycle_runs_for_both_variants() {
        let theme = DynamicTheme::default();
        assert!(run_cycle(&theme, false).is_ok());
        assert!(run_cycle(&theme, true).is_ok());
    }
}
