//! RGBA color type used by the drawing surface

/// A color in RGBA format, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    /// Opaque black
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// Opaque red
    pub const RED: Self = Self([255, 0, 0, 255]);
    /// Opaque yellow
    pub const YELLOW: Self = Self([255, 255, 0, 255]);
    /// Opaque green
    pub const GREEN: Self = Self([0, 255, 0, 255]);
    /// Opaque blue
    pub const BLUE: Self = Self([0, 0, 255, 255]);

    /// Create a color with the given RGB values and full opacity
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Create a color with the given RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Pack into the 0RGB `u32` layout the presentation buffer uses
    pub fn to_0rgb(self) -> u32 {
        let [r, g, b, _] = self.0;
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Alpha channel
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_0rgb_packing() {
        assert_eq!(Color::rgb(0xab, 0xcd, 0xef).to_0rgb(), 0x00ab_cdef);
        assert_eq!(Color::WHITE.to_0rgb(), 0x00ff_ffff);
        assert_eq!(Color::BLACK.to_0rgb(), 0);
    }

    #[test]
    fn test_alpha_ignored_by_packing() {
        assert_eq!(
            Color::rgba(10, 20, 30, 0).to_0rgb(),
            Color::rgb(10, 20, 30).to_0rgb()
        );
    }
}
