//! Asset loading: bitmap textures and TrueType fonts

mod font;
mod texture;

pub use font::FontFace;
pub use texture::Texture;
