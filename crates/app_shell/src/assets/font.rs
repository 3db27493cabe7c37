//! TrueType font loading and single-line rasterization
//!
//! Glyphs are rasterized with `fontdue` and composited into one alpha mask
//! per line of text; the mask is colorized into a [`Texture`] that the
//! tutorials blit like any other image.

use crate::assets::Texture;
use crate::color::Color;
use crate::error::{ShellError, ShellResult};
use fontdue::{Font, FontSettings};
use std::path::Path;

/// A loaded font at a fixed pixel size
pub struct FontFace {
    font: Font,
    px: f32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace").field("px", &self.px).finish()
    }
}

impl FontFace {
    /// Load a font from a TrueType/OpenType file
    ///
    /// # Errors
    /// Returns [`ShellError::AssetLoad`] when the file is missing or the
    /// font data cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P, px: f32) -> ShellResult<Self> {
        let path_ref = path.as_ref();
        log::debug!("loading font from {}", path_ref.display());

        let bytes = std::fs::read(path_ref).map_err(|e| ShellError::AssetLoad {
            path: path_ref.display().to_string(),
            reason: e.to_string(),
        })?;
        let font =
            Font::from_bytes(bytes.as_slice(), FontSettings::default()).map_err(|e| {
                ShellError::AssetLoad {
                    path: path_ref.display().to_string(),
                    reason: e.to_string(),
                }
            })?;

        log::info!("loaded font {} at {}px", path_ref.display(), px);
        Ok(Self { font, px })
    }

    /// Parse a font from in-memory bytes
    pub fn from_bytes(bytes: &[u8], px: f32) -> ShellResult<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|e| {
            ShellError::AssetLoad {
                path: "<memory>".to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { font, px })
    }

    /// Font size in pixels
    pub fn size(&self) -> f32 {
        self.px
    }

    /// Rasterize one line of text into a colorized texture
    ///
    /// Glyphs are placed on a common baseline derived from the font's
    /// horizontal line metrics. No wrapping, shaping, or kerning.
    pub fn render_line(&self, text: &str, color: Color) -> Texture {
        let (ascent, height) = match self.font.horizontal_line_metrics(self.px) {
            Some(line) => (line.ascent, (line.ascent - line.descent).ceil().max(1.0) as usize),
            None => (self.px, (self.px * 1.25).ceil().max(1.0) as usize),
        };

        let glyphs: Vec<(fontdue::Metrics, Vec<u8>)> = text
            .chars()
            .map(|c| self.font.rasterize(c, self.px))
            .collect();
        let width = line_width(glyphs.iter().map(|(m, _)| (m.xmin, m.width, m.advance_width)));

        let mut mask = vec![0u8; width * height];
        let baseline = ascent.ceil() as i32;
        let mut pen = 0.0f32;
        for (metrics, coverage) in &glyphs {
            let x0 = pen.round() as i32 + metrics.xmin;
            let y0 = baseline - metrics.height as i32 - metrics.ymin;
            for gy in 0..metrics.height {
                let dy = y0 + gy as i32;
                if dy < 0 || dy >= height as i32 {
                    continue;
                }
                for gx in 0..metrics.width {
                    let dx = x0 + gx as i32;
                    if dx < 0 || dx >= width as i32 {
                        continue;
                    }
                    let index = dy as usize * width + dx as usize;
                    mask[index] = mask[index].max(coverage[gy * metrics.width + gx]);
                }
            }
            pen += metrics.advance_width;
        }

        Texture::from_alpha_mask(&mask, width, height, color)
    }
}

/// Width in pixels needed to fit a line of glyphs
///
/// Takes `(xmin, bitmap_width, advance)` per glyph; accounts for glyphs that
/// overhang their advance and for trailing whitespace.
fn line_width(glyphs: impl IntoIterator<Item = (i32, usize, f32)>) -> usize {
    let mut pen = 0.0f32;
    let mut right = 0.0f32;
    for (xmin, width, advance) in glyphs {
        let glyph_right = pen + xmin as f32 + width as f32;
        right = right.max(glyph_right);
        pen += advance;
        right = right.max(pen);
    }
    right.ceil().max(1.0) as usize
}
