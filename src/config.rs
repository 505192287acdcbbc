//! Banner configuration: canvas geometry, animation timing and the
//! settings for each pipeline stage.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::hex;
use crate::terrain::TerrainConfig;
use crate::weather::WeatherConfig;

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("{0}")]
    Invalid(String),
}

/// Immutable configuration for one banner render.
///
/// All pipeline parameters live here; nothing is read from module-level
/// globals. Stored alongside generated assets for reproducibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Hex circumradius (center to vertex) in pixels.
    pub hex_size: f32,
    /// Number of animation frames.
    pub frames: u32,
    /// Per-frame display duration in milliseconds.
    pub delay_ms: u32,
    /// Random seed for terrain generation.
    pub seed: u64,
    /// Title line drawn over the banner.
    pub title: String,
    /// Subtitle line drawn under the title.
    pub subtitle: String,
    /// Weather overlay settings.
    pub weather: WeatherConfig,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 300,
            hex_size: 9.0,
            frames: 48,
            delay_ms: 120,
            seed: 1337,
            title: "hexweather".to_string(),
            subtitle: "procedural terrain & weather".to_string(),
            weather: WeatherConfig::default(),
        }
    }
}

impl BannerConfig {
    /// Load a configuration from a TOML file. Missing fields take their
    /// defaults; out-of-range values are rejected.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(64..=4096).contains(&self.width) {
            return Err(ConfigError::Invalid(format!(
                "width must be 64-4096, got {}",
                self.width
            )));
        }
        if !(64..=4096).contains(&self.height) {
            return Err(ConfigError::Invalid(format!(
                "height must be 64-4096, got {}",
                self.height
            )));
        }
        if !(3.0..=64.0).contains(&self.hex_size) {
            return Err(ConfigError::Invalid(format!(
                "hex_size must be 3-64, got {}",
                self.hex_size
            )));
        }
        if !(1..=600).contains(&self.frames) {
            return Err(ConfigError::Invalid(format!(
                "frames must be 1-600, got {}",
                self.frames
            )));
        }
        if !(20..=1000).contains(&self.delay_ms) {
            return Err(ConfigError::Invalid(format!(
                "delay_ms must be 20-1000, got {}",
                self.delay_ms
            )));
        }
        Ok(())
    }

    /// Grid width in cells: enough columns to cover the canvas plus a
    /// margin so the hex pattern reaches past every edge.
    pub fn cols(&self) -> u32 {
        (self.width as f32 / hex::col_step(self.hex_size)) as u32 + 3
    }

    /// Grid height in cells, with the same overdraw margin as `cols`.
    pub fn rows(&self) -> u32 {
        (self.height as f32 / hex::row_step(self.hex_size)) as u32 + 3
    }

    /// Terrain generation settings for this banner.
    pub fn terrain_config(&self) -> TerrainConfig {
        TerrainConfig::new(self.cols(), self.rows(), self.seed)
    }

    /// In-memory size of the full frame sequence in bytes (RGBA).
    pub fn frame_sequence_bytes(&self) -> u64 {
        self.frames as u64 * self.width as u64 * self.height as u64 * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_grid_dimensions() {
        let config = BannerConfig::default();
        // 800px over sqrt(3)*9 column steps, plus the 3-cell margin.
        assert_eq!(config.cols(), 54);
        // 300px over 13.5px row steps, plus the margin.
        assert_eq!(config.rows(), 25);
    }

    #[test]
    fn terrain_config_inherits_seed_and_grid() {
        let config = BannerConfig {
            seed: 4242,
            ..Default::default()
        };
        let terrain = config.terrain_config();
        assert_eq!(terrain.seed, 4242);
        assert_eq!(terrain.cols, config.cols());
        assert_eq!(terrain.rows, config.rows());
    }

    #[test]
    fn default_config_is_valid() {
        BannerConfig::default().validate().unwrap();
    }

    #[test]
    fn validate_rejects_out_of_range_frames() {
        let config = BannerConfig {
            frames: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("frames"), "error: {}", err);
    }

    #[test]
    fn validate_rejects_tiny_canvas() {
        let config = BannerConfig {
            width: 10,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("width"), "error: {}", err);
    }

    #[test]
    fn from_toml_string_with_partial_fields() {
        let config: BannerConfig = toml::from_str(
            r#"
seed = 7
frames = 24
title = "demo"

[weather]
rain_threshold = 0.6
"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.frames, 24);
        assert_eq!(config.title, "demo");
        assert_eq!(config.weather.rain_threshold, 0.6);
        // Unspecified fields keep their defaults.
        assert_eq!(config.width, 800);
        assert_eq!(config.delay_ms, 120);
    }

    #[test]
    fn from_file_valid() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmpfile,
            r#"
width = 400
height = 150
frames = 12
"#
        )
        .unwrap();

        let config = BannerConfig::from_file(tmpfile.path()).unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 150);
        assert_eq!(config.frames, 12);
    }

    #[test]
    fn from_file_missing() {
        let err = BannerConfig::from_file(Path::new("/nonexistent/banner.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"), "error: {}", err);
    }

    #[test]
    fn from_file_invalid_toml() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "not valid toml {{{{").unwrap();

        let err = BannerConfig::from_file(tmpfile.path()).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"), "error: {}", err);
    }

    #[test]
    fn from_file_out_of_range() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "delay_ms = 5").unwrap();

        let err = BannerConfig::from_file(tmpfile.path()).unwrap_err();
        assert!(err.to_string().contains("delay_ms"), "error: {}", err);
    }

    #[test]
    fn frame_sequence_bytes_scales_with_frames() {
        let config = BannerConfig {
            width: 100,
            height: 50,
            frames: 2,
            ..Default::default()
        };
        assert_eq!(config.frame_sequence_bytes(), 2 * 100 * 50 * 4);
    }
}
