//! Pointy-top hexagon geometry on an offset grid.

use glam::Vec2;

/// Horizontal spacing between hex columns (flat edge to flat edge).
pub fn col_step(size: f32) -> f32 {
    3.0_f32.sqrt() * size
}

/// Vertical spacing between hex rows (3/4 of the vertex-to-vertex height).
pub fn row_step(size: f32) -> f32 {
    2.0 * size * 0.75
}

/// Center of the hex at (col, row). Odd rows are shifted right by half a
/// column step.
pub fn cell_center(col: u32, row: u32, size: f32) -> Vec2 {
    let x_offset = if row % 2 == 1 { col_step(size) * 0.5 } else { 0.0 };
    Vec2::new(col as f32 * col_step(size) + x_offset, row as f32 * row_step(size))
}

/// The six corners of a pointy-top hexagon (vertices at top and bottom).
///
/// Corner `i` sits at angle `60°·i − 30°` from the center.
pub fn corners(center: Vec2, size: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32 - 30.0).to_radians();
        center + size * Vec2::new(angle.cos(), angle.sin())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_scale_with_size() {
        assert!((col_step(9.0) - 15.588_457).abs() < 1e-3);
        assert!((row_step(9.0) - 13.5).abs() < 1e-6);
    }

    #[test]
    fn odd_rows_are_offset_right() {
        let even = cell_center(3, 2, 9.0);
        let odd = cell_center(3, 3, 9.0);
        assert!((odd.x - even.x - col_step(9.0) * 0.5).abs() < 1e-4);
    }

    #[test]
    fn corners_are_pointy_top() {
        let center = Vec2::new(100.0, 100.0);
        let pts = corners(center, 9.0);

        // All corners lie on the circumradius.
        for p in pts {
            assert!((p.distance(center) - 9.0).abs() < 1e-4);
        }

        // Extreme y values hit center ± size (vertex at top and bottom).
        let min_y = pts.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let max_y = pts.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((min_y - 91.0).abs() < 1e-3);
        assert!((max_y - 109.0).abs() < 1e-3);
    }
}
