//! Title overlay: darkened band plus two lines of text, with an ordered
//! font fallback chain.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use super::builtin_font;

/// Band behind the title, in canvas pixels.
const BAND_LEFT: u32 = 12;
const BAND_RIGHT: u32 = 440;
const BAND_TOP: u32 = 8;
const BAND_BOTTOM: u32 = 58;
/// Blue lift applied when darkening the band.
const BAND_BLUE_LIFT: u8 = 15;

const TITLE_ORIGIN: (i32, i32) = (18, 10);
const TITLE_PX: f32 = 28.0;
const TITLE_COLOR: Rgba<u8> = Rgba([240, 240, 255, 255]);

const SUBTITLE_ORIGIN: (i32, i32) = (18, 38);
const SUBTITLE_PX: f32 = 14.0;
const SUBTITLE_COLOR: Rgba<u8> = Rgba([155, 165, 195, 255]);

/// A loaded title font: either a vector font from disk or the built-in
/// bitmap font.
pub enum TitleFont {
    Vector(FontVec),
    Builtin,
}

impl TitleFont {
    /// Tries each candidate font file in order; the first one that can be
    /// read and parsed wins. Ends in the built-in bitmap font, so loading
    /// never fails.
    pub fn load(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            if let Some(font) = load_font_file(path) {
                return TitleFont::Vector(font);
            }
        }
        TitleFont::Builtin
    }

    /// Default candidate list: macOS Menlo, then the DejaVu family common
    /// on Linux hosts.
    pub fn default_candidates() -> Vec<PathBuf> {
        [
            "/System/Library/Fonts/Menlo.ttc",
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ]
        .iter()
        .map(PathBuf::from)
        .collect()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TitleFont::Builtin)
    }

    /// Draws a line of text with its top-left corner at (x, y).
    pub fn draw(&self, img: &mut RgbaImage, x: i32, y: i32, px: f32, color: Rgba<u8>, text: &str) {
        match self {
            TitleFont::Vector(font) => {
                draw_text_mut(img, color, x, y, PxScale::from(px), font, text);
            }
            TitleFont::Builtin => draw_bitmap_text(img, x, y, px, color, text),
        }
    }
}

fn load_font_file(path: &Path) -> Option<FontVec> {
    let data = std::fs::read(path).ok()?;
    // Index 0 selects the first face of a collection (.ttc).
    FontVec::try_from_vec_and_index(data, 0).ok()
}

fn draw_bitmap_text(img: &mut RgbaImage, x: i32, y: i32, px: f32, color: Rgba<u8>, text: &str) {
    let scale = ((px / builtin_font::GLYPH_HEIGHT as f32).round() as i32).max(1);
    let mut cursor = x;
    for ch in text.chars() {
        if let Some(rows) = builtin_font::glyph(ch) {
            for (gy, row) in rows.iter().enumerate() {
                for (gx, cell) in row.bytes().enumerate() {
                    if cell == b'#' {
                        fill_block(
                            img,
                            cursor + gx as i32 * scale,
                            y + gy as i32 * scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        cursor += (builtin_font::GLYPH_WIDTH as i32 + 1) * scale;
    }
}

fn fill_block(img: &mut RgbaImage, x0: i32, y0: i32, size: i32, color: Rgba<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            let (px, py) = (x0 + dx, y0 + dy);
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// The title band drawn over every frame: a darkened rectangle with two
/// lines of text.
pub struct TitleOverlay {
    title: String,
    subtitle: String,
    font: TitleFont,
}

impl TitleOverlay {
    /// Creates an overlay, resolving the font through the default
    /// fallback chain.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::with_font(
            title,
            subtitle,
            TitleFont::load(&TitleFont::default_candidates()),
        )
    }

    pub fn with_font(title: impl Into<String>, subtitle: impl Into<String>, font: TitleFont) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            font,
        }
    }

    /// Darkens the band region and draws both text lines.
    pub fn apply(&self, img: &mut RgbaImage) {
        darken_band(img);
        let (tx, ty) = TITLE_ORIGIN;
        self.font.draw(img, tx, ty, TITLE_PX, TITLE_COLOR, &self.title);
        let (sx, sy) = SUBTITLE_ORIGIN;
        self.font
            .draw(img, sx, sy, SUBTITLE_PX, SUBTITLE_COLOR, &self.subtitle);
    }
}

/// Darkens the band behind the title: each channel divided by 3, with a
/// small lift on blue.
fn darken_band(img: &mut RgbaImage) {
    for y in BAND_TOP..BAND_BOTTOM.min(img.height()) {
        for x in BAND_LEFT..BAND_RIGHT.min(img.width()) {
            let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
            img.put_pixel(x, y, Rgba([r / 3, g / 3, (b / 3).saturating_add(BAND_BLUE_LIFT), a]));
        }
    }
}
