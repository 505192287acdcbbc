//! Frame rendering: hex-grid rasterization and the title overlay.

pub mod hex;

mod builtin_font;
mod text;

pub use text::{TitleFont, TitleOverlay};

use glam::Vec2;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

use crate::config::BannerConfig;
use crate::terrain::TerrainGrid;
use crate::weather::{self, WeatherConfig};

/// Canvas background color behind the hex grid.
const BACKGROUND: Rgba<u8> = Rgba([8, 8, 20, 255]);

/// Renders single animation frames from a terrain grid.
///
/// The renderer is immutable after construction; every frame derives only
/// from the grid and the frame index.
pub struct FrameRenderer {
    width: u32,
    height: u32,
    hex_size: f32,
    /// Grid width the cloud bands wrap over, fixed by the configuration.
    grid_cols: u32,
    total_frames: u32,
    weather: WeatherConfig,
    overlay: TitleOverlay,
}

impl FrameRenderer {
    /// Creates a renderer from a banner configuration, resolving the title
    /// font through the default fallback chain.
    pub fn new(config: &BannerConfig) -> Self {
        Self::with_overlay(
            config,
            TitleOverlay::new(config.title.clone(), config.subtitle.clone()),
        )
    }

    /// Creates a renderer with an explicit overlay (e.g. a fixed font).
    pub fn with_overlay(config: &BannerConfig, overlay: TitleOverlay) -> Self {
        Self {
            width: config.width,
            height: config.height,
            hex_size: config.hex_size,
            grid_cols: config.cols(),
            total_frames: config.frames,
            weather: config.weather.clone(),
            overlay,
        }
    }

    /// True when a hex centered at `center` can touch the visible canvas.
    /// Cells beyond twice the hex radius from every edge are culled.
    pub fn cell_visible(&self, center: Vec2) -> bool {
        let margin = self.hex_size * 2.0;
        center.x >= -margin
            && center.x <= self.width as f32 + margin
            && center.y >= -margin
            && center.y <= self.height as f32 + margin
    }

    /// Renders one frame of the animation.
    pub fn render(&self, grid: &TerrainGrid, frame: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.width, self.height, BACKGROUND);

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let center = hex::cell_center(col, row, self.hex_size);
                if !self.cell_visible(center) {
                    continue;
                }

                let cell = grid.get(row, col);
                let [r, g, b] = weather::cell_color(
                    &self.weather,
                    cell.biome,
                    frame,
                    col,
                    row,
                    self.grid_cols,
                    self.total_frames,
                );
                fill_hex(&mut img, center, self.hex_size, Rgba([r, g, b, 255]));
            }
        }

        self.overlay.apply(&mut img);
        img
    }
}

/// Draws a filled hexagon with no border.
fn fill_hex(img: &mut RgbaImage, center: Vec2, size: f32, color: Rgba<u8>) {
    let mut points: Vec<Point<i32>> = hex::corners(center, size)
        .iter()
        .map(|p| Point::new(p.x.round() as i32, p.y.round() as i32))
        .collect();

    // Tiny hexes can collapse corners onto the same pixel; the polygon
    // rasterizer rejects closed rings and empty shapes.
    points.dedup();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() >= 3 {
        draw_polygon_mut(img, &points, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{generate_terrain, Biome, Cell, TerrainConfig, TerrainGrid};

    fn test_config() -> BannerConfig {
        BannerConfig {
            width: 120,
            height: 64,
            hex_size: 9.0,
            frames: 8,
            ..Default::default()
        }
    }

    fn test_renderer(config: &BannerConfig) -> FrameRenderer {
        FrameRenderer::with_overlay(config, TitleOverlay::with_font("t", "s", TitleFont::Builtin))
    }

    #[test]
    fn frame_has_configured_dimensions() {
        let config = test_config();
        let grid = generate_terrain(&config.terrain_config());
        let frame = test_renderer(&config).render(&grid, 0);
        assert_eq!(frame.dimensions(), (120, 64));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = test_config();
        let grid = generate_terrain(&config.terrain_config());
        let renderer = test_renderer(&config);
        assert_eq!(renderer.render(&grid, 3), renderer.render(&grid, 3));
    }

    #[test]
    fn frames_differ_over_time() {
        let config = test_config();
        let grid = generate_terrain(&config.terrain_config());
        let renderer = test_renderer(&config);
        assert_ne!(renderer.render(&grid, 0), renderer.render(&grid, 4));
    }

    #[test]
    fn cell_visibility_margins() {
        let config = test_config();
        let renderer = test_renderer(&config);

        assert!(renderer.cell_visible(Vec2::new(60.0, 30.0)));
        assert!(renderer.cell_visible(Vec2::new(-17.9, 30.0)));
        assert!(!renderer.cell_visible(Vec2::new(-18.1, 30.0)));
        assert!(!renderer.cell_visible(Vec2::new(60.0, 64.0 + 18.1)));
    }

    #[test]
    fn culled_cells_do_not_affect_output() {
        let config = test_config();
        let base = generate_terrain(&TerrainConfig::new(20, 12, 7));

        // An enlarged grid whose extra cells all lie far outside the
        // canvas; the visible region is identical to the base grid.
        let mut cells = Vec::new();
        for row in 0..30 {
            for col in 0..40 {
                if row < 12 && col < 20 {
                    cells.push(*base.get(row, col));
                } else {
                    cells.push(Cell {
                        biome: Biome::Snow,
                        elevation: 9.9,
                    });
                }
            }
        }
        let padded = TerrainGrid::from_cells(40, 30, cells);

        let renderer = test_renderer(&config);
        assert_eq!(renderer.render(&base, 2), renderer.render(&padded, 2));
    }
}
