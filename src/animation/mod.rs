//! Animation assembly: terrain once, then frames in strict sequence.

use image::RgbaImage;

use crate::config::BannerConfig;
use crate::render::FrameRenderer;
use crate::terrain::generate_terrain;

/// An ordered frame sequence plus its timing metadata.
pub struct Animation {
    /// Frames in playback order.
    pub frames: Vec<RgbaImage>,
    /// Per-frame display duration in milliseconds.
    pub delay_ms: u32,
}

impl Animation {
    pub fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}

/// Renders the full animation for a configuration.
///
/// Terrain is generated exactly once; frames 0..N-1 are rendered strictly
/// sequentially from the same grid snapshot, so only the weather overlay
/// varies between frames. `on_frame` is invoked after each frame with
/// (frames done, total).
pub fn render_animation(
    config: &BannerConfig,
    mut on_frame: impl FnMut(u32, u32),
) -> Animation {
    let grid = generate_terrain(&config.terrain_config());
    let renderer = FrameRenderer::new(config);

    let mut frames = Vec::with_capacity(config.frames as usize);
    for index in 0..config.frames {
        frames.push(renderer.render(&grid, index));
        on_frame(index + 1, config.frames);
    }

    Animation {
        frames,
        delay_ms: config.delay_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(frames: u32) -> BannerConfig {
        BannerConfig {
            width: 96,
            height: 64,
            frames,
            ..Default::default()
        }
    }

    #[test]
    fn single_frame_animation() {
        let config = small_config(1);
        let animation = render_animation(&config, |_, _| {});
        assert_eq!(animation.frame_count(), 1);
        assert_eq!(animation.frames[0].dimensions(), (96, 64));
        assert_eq!(animation.delay_ms, config.delay_ms);
    }

    #[test]
    fn frames_are_sequential_and_reported() {
        let config = small_config(5);
        let mut reported = Vec::new();
        let animation = render_animation(&config, |done, total| reported.push((done, total)));

        assert_eq!(animation.frame_count(), 5);
        assert_eq!(reported, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
    }

    #[test]
    fn all_frames_share_dimensions() {
        let animation = render_animation(&small_config(3), |_, _| {});
        for frame in &animation.frames {
            assert_eq!(frame.dimensions(), (96, 64));
        }
    }

    #[test]
    fn same_config_reproduces_identical_frames() {
        let config = small_config(2);
        let a = render_animation(&config, |_, _| {});
        let b = render_animation(&config, |_, _| {});
        assert_eq!(a.frames, b.frames);
    }
}
