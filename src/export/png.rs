//! Single still-frame PNG export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbaImage};
use thiserror::Error;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a single rendered frame as an RGBA PNG.
///
/// Creates the parent directory if absent and overwrites any existing
/// file at `path`.
pub fn export_frame_png(
    frame: &RgbaImage,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(
        frame.as_raw(),
        frame.width(),
        frame.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn export_writes_decodable_png() {
        let frame = RgbaImage::from_pixel(32, 16, Rgba([10, 120, 200, 255]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("still.png");

        export_frame_png(&frame, &path, &PngExportOptions::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 16));
        assert_eq!(decoded.get_pixel(5, 5).0, [10, 120, 200, 255]);
    }

    #[test]
    fn export_creates_parent_directories() {
        let frame = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs").join("still.png");

        export_frame_png(&frame, &path, &PngExportOptions::default()).unwrap();
        assert!(path.exists());
    }
}
