//! Output encoding for rendered animations and stills.

mod gif;
mod png;

pub use gif::{export_gif, GifExportError, GifExportOptions};
pub use png::{export_frame_png, PngExportError, PngExportOptions};
