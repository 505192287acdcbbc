//! Time-varying weather overlay: cloud bands, rain and seasonal tint.
//!
//! All functions here are pure; the overlay for a cell depends only on the
//! configuration, the frame index and the cell's grid position and biome.

mod config;

pub use config::WeatherConfig;

use std::f32::consts::TAU;

use crate::terrain::Biome;

/// Near-white tone the base color is blended toward under cloud cover.
const CLOUD_TONE: [f32; 3] = [225.0, 230.0, 240.0];

/// Rain shading: red/green damping, blue gain and lift.
const RAIN_DAMP_R: f32 = 0.82;
const RAIN_DAMP_G: f32 = 0.85;
const RAIN_BLUE_GAIN: f32 = 1.05;
const RAIN_BLUE_LIFT: f32 = 12.0;

/// Seasonal tint weights on the red and blue channels.
const SEASON_RED_WEIGHT: f32 = 0.3;
const SEASON_BLUE_WEIGHT: f32 = 0.2;

/// Horizontal position of a cloud band at the given frame.
///
/// The band advances linearly and wraps over the grid width plus a margin
/// on both sides, so it slides fully off one edge before re-entering at
/// the other. Periodic in the frame index.
pub fn band_position(
    config: &WeatherConfig,
    speed: f32,
    phase_cols: f32,
    frame: u32,
    cols: u32,
) -> f32 {
    let span = cols as f32 + 2.0 * config.band_margin;
    (frame as f32 * speed + phase_cols) % span - config.band_margin
}

/// Combined cloud intensity in [0, 1] for a cell at the given frame.
///
/// Two independently-phased bands with linear distance falloff, combined
/// by taking the maximum.
pub fn cloud_intensity(config: &WeatherConfig, frame: u32, col: u32, row: u32, cols: u32) -> f32 {
    let width = config.base_width
        + config.width_amplitude * (row as f32 * config.row_frequency).sin();

    let primary_center = band_position(config, config.primary_speed, 0.0, frame, cols);
    let primary = 1.0 - (col as f32 - primary_center).abs() / width;

    let secondary_center = band_position(
        config,
        config.secondary_speed,
        cols as f32 * config.secondary_offset,
        frame,
        cols,
    );
    let secondary = (1.0
        - (col as f32 - secondary_center).abs() / (width * config.secondary_width_scale))
        * config.secondary_strength;

    primary.max(secondary).clamp(0.0, 1.0)
}

/// True when the cloud cover is dense enough to rain and the cell is land.
/// Never true over water, regardless of intensity.
pub fn is_raining(config: &WeatherConfig, intensity: f32, biome: Biome) -> bool {
    intensity > config.rain_threshold && !biome.is_water()
}

/// Seasonal temperature shift for the given frame: a sinusoid completing
/// one full cycle over the animation. Positive values warm the palette.
pub fn seasonal_shift(config: &WeatherConfig, frame: u32, total_frames: u32) -> f32 {
    let phase = frame as f32 / total_frames.max(1) as f32 * TAU;
    phase.sin() * config.season_amplitude
}

/// Applies the weather overlay to a base biome color.
///
/// Pipeline: cloud whitening, rain darkening, seasonal tint. Every channel
/// is clamped to the displayable range.
pub fn shade(
    config: &WeatherConfig,
    base: [u8; 3],
    intensity: f32,
    raining: bool,
    shift: f32,
) -> [u8; 3] {
    let mut r = base[0] as f32;
    let mut g = base[1] as f32;
    let mut b = base[2] as f32;

    r += intensity * (CLOUD_TONE[0] - r) * config.whiten_strength;
    g += intensity * (CLOUD_TONE[1] - g) * config.whiten_strength;
    b += intensity * (CLOUD_TONE[2] - b) * config.whiten_strength;

    if raining {
        r *= RAIN_DAMP_R;
        g *= RAIN_DAMP_G;
        b = (b * RAIN_BLUE_GAIN + RAIN_BLUE_LIFT).min(255.0);
    }

    r += shift * SEASON_RED_WEIGHT;
    b -= shift * SEASON_BLUE_WEIGHT;

    [
        r.clamp(0.0, 255.0) as u8,
        g.clamp(0.0, 255.0) as u8,
        b.clamp(0.0, 255.0) as u8,
    ]
}

/// Full per-cell color pipeline: base biome color through the weather
/// overlay for the given frame.
pub fn cell_color(
    config: &WeatherConfig,
    biome: Biome,
    frame: u32,
    col: u32,
    row: u32,
    cols: u32,
    total_frames: u32,
) -> [u8; 3] {
    let intensity = cloud_intensity(config, frame, col, row, cols);
    let raining = is_raining(config, intensity, biome);
    let shift = seasonal_shift(config, frame, total_frames);
    shade(config, biome.base_rgb(), intensity, raining, shift)
}
