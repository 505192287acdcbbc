//! Procedural terrain synthesis from scattered influence points.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{Biome, Cell, TerrainConfig, TerrainGrid};

/// An influence point: a position in grid coordinate space and a weight.
/// Used only during synthesis and discarded afterwards.
#[derive(Debug, Clone, Copy)]
struct InfluencePoint {
    pos: Vec2,
    weight: f32,
}

fn scatter_points(config: &TerrainConfig, rng: &mut ChaCha8Rng) -> Vec<InfluencePoint> {
    (0..config.influence_points)
        .map(|_| InfluencePoint {
            pos: Vec2::new(
                rng.random_range(0.0..config.cols as f32),
                rng.random_range(0.0..config.rows as f32),
            ),
            weight: rng.random_range(config.weight_min..config.weight_max),
        })
        .collect()
}

/// Normalized vertical distance from the grid center: 0 at the equator
/// row, 1 at the poles.
pub fn latitude_factor(row: u32, rows: u32) -> f32 {
    let half = rows as f32 / 2.0;
    (row as f32 - half).abs() / half
}

fn elevation_at(col: u32, row: u32, points: &[InfluencePoint], falloff: f32) -> f32 {
    let here = Vec2::new(col as f32, row as f32);
    points
        .iter()
        .map(|p| (-here.distance(p.pos) * falloff).exp() * p.weight)
        .sum()
}

/// Classifies a cell into a biome from its elevation and latitude factor.
///
/// Ocean tiers ascend by elevation; land splits on elevation and latitude
/// thresholds, with polar latitudes forcing cold biomes and equatorial
/// lowlands drying out into desert.
pub fn classify(elevation: f32, latitude: f32) -> Biome {
    if elevation < 1.6 {
        Biome::DeepOcean
    } else if elevation < 2.1 {
        Biome::Ocean
    } else if elevation < 2.5 {
        Biome::Coast
    } else if elevation > 5.0 {
        if latitude < 0.7 {
            Biome::Mountain
        } else {
            Biome::Snow
        }
    } else if latitude > 0.78 {
        if elevation < 3.5 {
            Biome::Tundra
        } else {
            Biome::Snow
        }
    } else if latitude > 0.55 {
        Biome::Boreal
    } else if elevation > 3.8 {
        Biome::Forest
    } else if latitude < 0.2 && elevation < 3.0 {
        Biome::Desert
    } else {
        Biome::Plains
    }
}

/// Generates a terrain grid with coherent landmasses.
///
/// Deterministic for a fixed configuration: the same seed always produces
/// the same grid.
pub fn generate_terrain(config: &TerrainConfig) -> TerrainGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let points = scatter_points(config, &mut rng);

    let mut cells = Vec::with_capacity((config.cols as usize) * (config.rows as usize));
    for row in 0..config.rows {
        let latitude = latitude_factor(row, config.rows);
        for col in 0..config.cols {
            let elevation = elevation_at(col, row, &points, config.falloff);
            cells.push(Cell {
                biome: classify(elevation, latitude),
                elevation,
            });
        }
    }

    TerrainGrid::from_cells(config.cols, config.rows, cells)
}
