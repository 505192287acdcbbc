//! Weather overlay configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration for the per-frame weather overlay.
///
/// Two cloud bands sweep horizontally across the grid; cells under dense
/// cloud over land receive rain shading, and the whole palette drifts with
/// a seasonal temperature cycle spanning the full animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Primary band advance in columns per frame.
    pub primary_speed: f32,
    /// Secondary band advance in columns per frame.
    pub secondary_speed: f32,
    /// Secondary band phase offset as a fraction of grid width.
    pub secondary_offset: f32,
    /// Off-grid margin (columns) the bands wrap through on either side.
    pub band_margin: f32,
    /// Base half-width of the primary band in columns.
    pub base_width: f32,
    /// Row-dependent width modulation amplitude.
    pub width_amplitude: f32,
    /// Row frequency of the width modulation.
    pub row_frequency: f32,
    /// Secondary band width as a fraction of the primary width.
    pub secondary_width_scale: f32,
    /// Secondary band intensity scale.
    pub secondary_strength: f32,
    /// Cloud intensity above which land cells are raining.
    pub rain_threshold: f32,
    /// Peak seasonal temperature shift in color units.
    pub season_amplitude: f32,
    /// Fraction by which clouds whiten the base color.
    pub whiten_strength: f32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            primary_speed: 1.2,
            secondary_speed: 0.8,
            secondary_offset: 0.6,
            band_margin: 10.0,
            base_width: 5.0,
            width_amplitude: 2.5,
            row_frequency: 0.4,
            secondary_width_scale: 0.7,
            secondary_strength: 0.6,
            rain_threshold: 0.5,
            season_amplitude: 12.0,
            whiten_strength: 0.65,
        }
    }
}
