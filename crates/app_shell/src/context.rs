//! Application context: every handle the program owns, in one value
//!
//! The window/renderer/texture/font handles live as fields of an explicit
//! context passed to the initializer, the event loop, and the finalizer,
//! rather than in process-wide statics. The ownership chain is strictly
//! linear: the subsystem outlives the window, the window outlives the
//! frame, the frame outlives the assets drawn onto it.

use crate::assets::{FontFace, Texture};
use crate::frame::Frame;
use crate::platform::{VideoSubsystem, WindowHandle};
use crate::registry::Slot;

/// Loaded assets, grouped so the event loop can borrow them alongside the
/// frame and window
#[derive(Debug, Default)]
pub struct Assets {
    /// Texture to composite, if the program loaded one
    pub texture: Slot<Texture>,
    /// Font, if the program loaded one
    pub font: Slot<FontFace>,
}

/// The resource registry: one slot per handle type
#[derive(Debug, Default)]
pub struct AppContext {
    /// Platform subsystem guard, acquired first and released last
    pub subsystem: Slot<VideoSubsystem>,
    /// The main window
    pub window: Slot<WindowHandle>,
    /// The drawing surface bound to the window
    pub frame: Slot<Frame>,
    /// Loaded assets
    pub assets: Assets,
}

impl AppContext {
    /// An empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every present handle in strict reverse-acquisition order
    ///
    /// Safe on a full, partial, or empty context, and idempotent. Returns
    /// the labels of the handles actually released, in teardown order.
    pub fn release_all(&mut self) -> Vec<&'static str> {
        let mut released = Vec::new();
        if self.assets.texture.release() {
            released.push("texture");
        }
        if self.assets.font.release() {
            released.push("font");
        }
        if self.frame.release() {
            released.push("frame");
        }
        if self.window.release() {
            released.push("window");
        }
        if self.subsystem.release() {
            released.push("video subsystem");
        }
        released
    }

    /// Whether no handle is currently valid
    pub fn is_empty(&self) -> bool {
        !self.subsystem.is_valid()
            && !self.window.is_valid()
            && !self.frame.is_valid()
            && !self.assets.texture.is_valid()
            && !self.assets.font.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_release_all_observes_reverse_acquisition_order() {
        let mut ctx = AppContext::new();
        // Acquisition order: subsystem, frame, texture.
        ctx.subsystem.set(VideoSubsystem::stub());
        ctx.frame.set(Frame::new(8, 8).unwrap());
        ctx.assets.texture.set(Texture::solid(1, 1, Color::WHITE));

        let released = ctx.release_all();
        assert_eq!(released, vec!["texture", "frame", "video subsystem"]);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_release_all_is_idempotent() {
        let mut ctx = AppContext::new();
        ctx.frame.set(Frame::new(4, 4).unwrap());

        assert_eq!(ctx.release_all(), vec!["frame"]);
        assert!(ctx.release_all().is_empty());
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_release_all_on_empty_context_is_a_noop() {
        let mut ctx = AppContext::new();
        assert!(ctx.release_all().is_empty());
        assert!(ctx.is_empty());
    }
}
