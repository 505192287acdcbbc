//! Terrain generation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for procedural terrain synthesis.
///
/// Elevation is the sum of distance-decayed contributions from a set of
/// randomly scattered influence points; biomes are classified from the
/// resulting elevation plus a latitude factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid width in cells.
    pub cols: u32,
    /// Grid height in cells.
    pub rows: u32,
    /// Random seed for reproducible generation.
    pub seed: u64,
    /// Number of influence points scattered across the grid.
    pub influence_points: usize,
    /// Exponential falloff rate per cell of distance.
    pub falloff: f32,
    /// Minimum influence point weight.
    pub weight_min: f32,
    /// Maximum influence point weight.
    pub weight_max: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            cols: 54,
            rows: 25,
            seed: 1337,
            influence_points: 14,
            falloff: 0.07,
            weight_min: 0.4,
            weight_max: 1.4,
        }
    }
}

impl TerrainConfig {
    /// Creates a configuration with the given grid size and seed.
    pub fn new(cols: u32, rows: u32, seed: u64) -> Self {
        Self {
            cols,
            rows,
            seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TerrainConfig::default();
        assert_eq!(config.influence_points, 14);
        assert_eq!(config.falloff, 0.07);
        assert!(config.weight_min < config.weight_max);
    }

    #[test]
    fn new_overrides_grid_and_seed_only() {
        let config = TerrainConfig::new(80, 40, 7);
        assert_eq!(config.cols, 80);
        assert_eq!(config.rows, 40);
        assert_eq!(config.seed, 7);
        assert_eq!(config.influence_points, TerrainConfig::default().influence_points);
    }
}
