//! Terrain grid data structures and biome classification.

mod config;
mod generate;

pub use config::TerrainConfig;
pub use generate::{generate_terrain, latitude_factor};

use serde::{Deserialize, Serialize};

/// Biome classification for a terrain cell. Drives the base render color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    DeepOcean,
    Ocean,
    Coast,
    Plains,
    Forest,
    Boreal,
    Mountain,
    Desert,
    Tundra,
    Snow,
}

impl Biome {
    /// Base palette color for this biome.
    pub fn base_rgb(self) -> [u8; 3] {
        match self {
            Biome::DeepOcean => [12, 40, 90],
            Biome::Ocean => [20, 60, 120],
            Biome::Coast => [45, 105, 165],
            Biome::Plains => [115, 160, 55],
            Biome::Forest => [35, 100, 35],
            Biome::Boreal => [45, 75, 55],
            Biome::Mountain => [135, 125, 115],
            Biome::Desert => [195, 175, 115],
            Biome::Tundra => [175, 195, 205],
            Biome::Snow => [225, 235, 245],
        }
    }

    /// True for open-water biomes. Water never receives rain shading.
    pub fn is_water(self) -> bool {
        matches!(self, Biome::DeepOcean | Biome::Ocean)
    }

    /// Returns the stable name of the biome.
    pub fn name(self) -> &'static str {
        match self {
            Biome::DeepOcean => "deep_ocean",
            Biome::Ocean => "ocean",
            Biome::Coast => "coast",
            Biome::Plains => "plains",
            Biome::Forest => "forest",
            Biome::Boreal => "boreal",
            Biome::Mountain => "mountain",
            Biome::Desert => "desert",
            Biome::Tundra => "tundra",
            Biome::Snow => "snow",
        }
    }

    /// All biome variants, in declaration order.
    pub fn all() -> [Biome; 10] {
        [
            Biome::DeepOcean,
            Biome::Ocean,
            Biome::Coast,
            Biome::Plains,
            Biome::Forest,
            Biome::Boreal,
            Biome::Mountain,
            Biome::Desert,
            Biome::Tundra,
            Biome::Snow,
        ]
    }
}

/// A single terrain cell: biome classification plus the raw elevation
/// scalar it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub biome: Biome,
    pub elevation: f32,
}

/// A fixed-size grid of terrain cells stored in row-major order.
///
/// Generated exactly once per run and read-only afterwards; every frame of
/// the animation derives from the same grid snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    cols: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl TerrainGrid {
    /// Builds a grid from row-major cells.
    ///
    /// # Panics
    /// Panics if `cells.len() != cols * rows`.
    pub fn from_cells(cols: u32, rows: u32, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), (cols as usize) * (rows as usize));
        Self { cols, rows, cells }
    }

    /// Returns the cell at the given position.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: u32, col: u32) -> &Cell {
        debug_assert!(row < self.rows && col < self.cols);
        &self.cells[(row * self.cols + col) as usize]
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns an iterator over all cells with their (row, col) position.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i as u32 / cols, i as u32 % cols, c))
    }

    /// Computes the (min, max) elevation range across the grid.
    pub fn elevation_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for cell in &self.cells {
            min = min.min(cell.elevation);
            max = max.max(cell.elevation);
        }
        (min, max)
    }
}
