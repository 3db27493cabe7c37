//! Software drawing surface
//!
//! A plain `u32` pixel buffer in the 0RGB layout the presentation layer
//! expects. Drawing here is deliberately simple: fill, clipped alpha-over
//! blits, and a nearest-neighbor stretch for full-frame images.

use crate::assets::Texture;
use crate::color::Color;
use crate::error::{ShellError, ShellResult};

/// The renderer/surface handle: pixels drawn here are pushed to the window
/// once per event-loop iteration
#[derive(Debug)]
pub struct Frame {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Frame {
    /// Create a surface matching the window's client area
    ///
    /// # Errors
    /// Returns [`ShellError::RendererCreation`] for a zero-sized area.
    pub fn new(width: usize, height: usize) -> ShellResult<Self> {
        if width == 0 || height == 0 {
            return Err(ShellError::RendererCreation(format!(
                "zero-sized drawing surface ({width}x{height})"
            )));
        }
        Ok(Self {
            pixels: vec![0; width * height],
            width,
            height,
        })
    }

    /// Surface width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw 0RGB pixel buffer, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Fill the whole surface with one color
    pub fn fill(&mut self, color: Color) {
        let value = color.to_0rgb();
        self.pixels.fill(value);
    }

    /// Alpha-over blit at the given position, clipped to the surface
    pub fn blit(&mut self, texture: &Texture, x: i32, y: i32) {
        for ty in 0..texture.height() {
            let Some(dy) = self.clip(y, ty, self.height) else {
                continue;
            };
            for tx in 0..texture.width() {
                let Some(dx) = self.clip(x, tx, self.width) else {
                    continue;
                };
                let index = dy * self.width + dx;
                self.pixels[index] = blend(texture.pixel(tx, ty), self.pixels[index]);
            }
        }
    }

    /// Blit centered at the texture's natural size
    pub fn blit_centered(&mut self, texture: &Texture) {
        let x = (self.width as i32 - texture.width() as i32) / 2;
        let y = (self.height as i32 - texture.height() as i32) / 2;
        self.blit(texture, x, y);
    }

    /// Stretch the texture over the whole surface, nearest neighbor
    pub fn blit_stretched(&mut self, texture: &Texture) {
        if texture.width() == 0 || texture.height() == 0 {
            return;
        }
        for dy in 0..self.height {
            let sy = dy * texture.height() / self.height;
            for dx in 0..self.width {
                let sx = dx * texture.width() / self.width;
                let index = dy * self.width + dx;
                self.pixels[index] = blend(texture.pixel(sx, sy), self.pixels[index]);
            }
        }
    }

    fn clip(&self, offset: i32, texel: usize, limit: usize) -> Option<usize> {
        let pos = offset.checked_add(i32::try_from(texel).ok()?)?;
        if pos < 0 {
            return None;
        }
        let pos = pos as usize;
        (pos < limit).then_some(pos)
    }
}

/// Source-over compositing of an RGBA texel onto a 0RGB pixel
fn blend(src: [u8; 4], dst: u32) -> u32 {
    let a = u32::from(src[3]);
    if a == 255 {
        return (u32::from(src[0]) << 16) | (u32::from(src[1]) << 8) | u32::from(src[2]);
    }
    if a == 0 {
        return dst;
    }
    let inv = 255 - a;
    let r = (u32::from(src[0]) * a + ((dst >> 16) & 0xff) * inv) / 255;
    let g = (u32::from(src[1]) * a + ((dst >> 8) & 0xff) * inv) / 255;
    let b = (u32::from(src[2]) * a + (dst & 0xff) * inv) / 255;
    (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_surface_is_refused() {
        assert!(matches!(
            Frame::new(0, 480),
            Err(ShellError::RendererCreation(_))
        ));
        assert!(matches!(
            Frame::new(640, 0),
            Err(ShellError::RendererCreation(_))
        ));
    }

    #[test]
    fn test_fill_covers_every_pixel() {
        let mut frame = Frame::new(4, 3).unwrap();
        frame.fill(Color::RED);
        assert!(frame.pixels().iter().all(|&p| p == 0x00ff_0000));
    }

    #[test]
    fn test_blit_opaque_replaces_pixels() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.fill(Color::BLACK);
        let tex = Texture::solid(2, 2, Color::GREEN);
        frame.blit(&tex, 1, 1);

        assert_eq!(frame.pixels()[1 * 4 + 1], 0x0000_ff00);
        assert_eq!(frame.pixels()[2 * 4 + 2], 0x0000_ff00);
        // Untouched corner stays black.
        assert_eq!(frame.pixels()[0], 0);
    }

    #[test]
    fn test_blit_clips_at_negative_coordinates() {
        let mut frame = Frame::new(2, 2).unwrap();
        let tex = Texture::solid(3, 3, Color::BLUE);
        frame.blit(&tex, -2, -2);
        // Only the texture's bottom-right texel lands on the surface.
        assert_eq!(frame.pixels()[0], 0x0000_00ff);
        assert_eq!(frame.pixels()[1], 0);
        assert_eq!(frame.pixels()[2], 0);
        assert_eq!(frame.pixels()[3], 0);
    }

    #[test]
    fn test_blit_half_transparent_blends() {
        let mut frame = Frame::new(1, 1).unwrap();
        frame.fill(Color::BLACK);
        let tex = Texture::solid(1, 1, Color::rgba(255, 255, 255, 128));
        frame.blit(&tex, 0, 0);
        let pixel = frame.pixels()[0];
        let channel = (pixel >> 16) & 0xff;
        assert!((127..=129).contains(&channel));
    }

    #[test]
    fn test_blit_stretched_fills_surface() {
        let mut frame = Frame::new(5, 3).unwrap();
        let tex = Texture::solid(1, 1, Color::YELLOW);
        frame.blit_stretched(&tex);
        assert!(frame.pixels().iter().all(|&p| p == 0x00ff_ff00));
    }

    #[test]
    fn test_blit_centered_position() {
        let mut frame = Frame::new(6, 6).unwrap();
        let tex = Texture::solid(2, 2, Color::RED);
        frame.blit_centered(&tex);
        assert_eq!(frame.pixels()[2 * 6 + 2], 0x00ff_0000);
        assert_eq!(frame.pixels()[3 * 6 + 3], 0x00ff_0000);
        assert_eq!(frame.pixels()[0], 0);
    }
}
