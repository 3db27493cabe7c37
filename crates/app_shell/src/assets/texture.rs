//! Bitmap texture loading
//!
//! Decodes image files into RGBA8 pixel data ready for compositing onto the
//! drawing surface.

use crate::color::Color;
use crate::error::{ShellError, ShellResult};
use std::path::Path;

/// Decoded RGBA pixel data
#[derive(Debug, Clone)]
pub struct Texture {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Texture {
    /// Load a texture from an image file
    ///
    /// # Errors
    /// Returns [`ShellError::AssetLoad`] when the file is missing or cannot
    /// be decoded.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ShellResult<Self> {
        let path_ref = path.as_ref();
        log::debug!("loading image from {}", path_ref.display());

        let img = image::open(path_ref).map_err(|e| ShellError::AssetLoad {
            path: path_ref.display().to_string(),
            reason: e.to_string(),
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("loaded image {}x{} from {}", width, height, path_ref.display());

        Ok(Self {
            data: rgba.into_raw(),
            width: width as usize,
            height: height as usize,
        })
    }

    /// Decode a texture from in-memory image bytes
    pub fn from_bytes(bytes: &[u8]) -> ShellResult<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| ShellError::AssetLoad {
            path: "<memory>".to_string(),
            reason: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            data: rgba.into_raw(),
            width: width as usize,
            height: height as usize,
        })
    }

    /// A solid-color texture
    pub fn solid(width: usize, height: usize, color: Color) -> Self {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&color.0);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Colorize an alpha coverage mask, as produced by glyph rasterization
    pub fn from_alpha_mask(mask: &[u8], width: usize, height: usize, color: Color) -> Self {
        debug_assert_eq!(mask.len(), width * height);
        let [r, g, b, _] = color.0;
        let mut data = Vec::with_capacity(mask.len() * 4);
        for &coverage in mask {
            data.extend_from_slice(&[r, g, b, coverage]);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Texture width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Texture height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA texel at the given position
    pub(crate) fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}
