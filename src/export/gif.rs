//! Looping animated GIF export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use thiserror::Error;

use crate::animation::Animation;

/// Errors that can occur during GIF export.
#[derive(Error, Debug)]
pub enum GifExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Animation has no frames")]
    Empty,
}

/// Options for GIF export.
#[derive(Debug, Clone)]
pub struct GifExportOptions {
    /// Encoder speed/quality trade-off (1 = best quality, 30 = fastest).
    pub speed: i32,
}

impl Default for GifExportOptions {
    fn default() -> Self {
        Self { speed: 10 }
    }
}

/// Encodes an animation as a single infinitely-looping GIF file.
///
/// Creates the parent directory if absent and overwrites any existing
/// file at `path`. Every frame is written with the animation's per-frame
/// delay. Encoding or filesystem failures propagate unchanged.
pub fn export_gif(
    animation: &Animation,
    path: &Path,
    options: &GifExportOptions,
) -> Result<(), GifExportError> {
    if animation.frames.is_empty() {
        return Err(GifExportError::Empty);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = GifEncoder::new_with_speed(writer, options.speed);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(animation.delay_ms, 1);
    let frames = animation
        .frames
        .iter()
        .map(|image| Frame::from_parts(image.clone(), 0, 0, delay));
    encoder.encode_frames(frames)?;

    Ok(())
}
