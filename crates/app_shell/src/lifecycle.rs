//! Initialization and teardown state machine
//!
//! The [`Initializer`] runs an ordered sequence of labeled acquisition
//! steps. A step either registers its handle in the context or fails, in
//! which case everything acquired so far is unwound through [`finalize`]
//! before the error is reported — no partial state is ever left live.
//! [`finalize`] is also the teardown path for a normal quit.

use crate::assets::{FontFace, Texture};
use crate::color::Color;
use crate::config::WindowConfig;
use crate::context::AppContext;
use crate::error::{ShellError, ShellResult};
use crate::frame::Frame;
use crate::platform::{VideoSubsystem, WindowHandle};

type StepFn = Box<dyn FnOnce(&mut AppContext) -> ShellResult<()>>;

/// Ordered acquisition sequence
#[derive(Default)]
pub struct Initializer {
    steps: Vec<(&'static str, StepFn)>,
}

impl Initializer {
    /// An initializer with no steps
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a custom acquisition step
    pub fn step(
        mut self,
        label: &'static str,
        run: impl FnOnce(&mut AppContext) -> ShellResult<()> + 'static,
    ) -> Self {
        self.steps.push((label, Box::new(run)));
        self
    }

    /// Acquire the platform video subsystem
    pub fn with_video_subsystem(self) -> Self {
        self.step("video subsystem", |ctx| {
            ctx.subsystem.set(VideoSubsystem::acquire()?);
            Ok(())
        })
    }

    /// Open the main window; requires the subsystem step
    pub fn with_window(self, config: WindowConfig) -> Self {
        self.step("window", move |ctx| {
            let Some(subsystem) = ctx.subsystem.get() else {
                return Err(ShellError::WindowCreation(
                    "video subsystem not acquired".to_string(),
                ));
            };
            let window = WindowHandle::open(subsystem, &config)?;
            ctx.window.set(window);
            Ok(())
        })
    }

    /// Create the drawing surface; requires the window step
    pub fn with_frame(self) -> Self {
        self.step("frame", |ctx| {
            let Some(window) = ctx.window.get() else {
                return Err(ShellError::RendererCreation(
                    "no window to create a surface for".to_string(),
                ));
            };
            let frame = Frame::new(window.width(), window.height())?;
            ctx.frame.set(frame);
            Ok(())
        })
    }

    /// Load a bitmap texture from disk
    pub fn with_texture(self, path: String) -> Self {
        self.step("texture", move |ctx| {
            ctx.assets.texture.set(Texture::from_file(&path)?);
            Ok(())
        })
    }

    /// Load a TrueType font from disk
    pub fn with_font(self, path: String, px: f32) -> Self {
        self.step("font", move |ctx| {
            ctx.assets.font.set(FontFace::load(&path, px)?);
            Ok(())
        })
    }

    /// Rasterize a line of text into the texture slot; requires the font step
    pub fn with_text_texture(self, text: String, color: Color) -> Self {
        self.step("text texture", move |ctx| {
            let Some(font) = ctx.assets.font.get() else {
                return Err(ShellError::AssetLoad {
                    path: "<text>".to_string(),
                    reason: "no font loaded to render with".to_string(),
                });
            };
            ctx.assets.texture.set(font.render_line(&text, color));
            Ok(())
        })
    }

    /// Run the steps in order
    ///
    /// # Errors
    /// Returns the first step's error after fully unwinding the context;
    /// the failing step's label and diagnostic are also logged.
    pub fn run(self, ctx: &mut AppContext) -> ShellResult<()> {
        for (label, run) in self.steps {
            log::debug!("init step: {label}");
            if let Err(err) = run(ctx) {
                log::error!("init step '{label}' failed: {err}");
                finalize(ctx);
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Release every acquired resource in reverse-acquisition order
///
/// The unique teardown path for both normal quit and initialization
/// failure; safe to call any number of times on any context state.
pub fn finalize(ctx: &mut AppContext) {
    for label in ctx.release_all() {
        log::debug!("released {label}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_subsystem_step(init: Initializer) -> Initializer {
        init.step("video subsystem", |ctx| {
            ctx.subsystem.set(VideoSubsystem::stub());
            Ok(())
        })
    }

    #[test]
    fn test_successful_run_leaves_handles_valid() {
        let mut ctx = AppContext::new();
        let init = stub_subsystem_step(Initializer::new()).step("frame", |ctx| {
            ctx.frame.set(Frame::new(32, 32)?);
            Ok(())
        });

        init.run(&mut ctx).unwrap();
        assert!(ctx.subsystem.is_valid());
        assert!(ctx.frame.is_valid());
        finalize(&mut ctx);
    }

    #[test]
    fn test_failure_at_first_step_leaves_context_empty() {
        let mut ctx = AppContext::new();
        let init = Initializer::new().step("video subsystem", |_| {
            Err(ShellError::Subsystem("simulated".to_string()))
        });

        let err = init.run(&mut ctx).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_failure_unwinds_every_earlier_acquisition() {
        let mut ctx = AppContext::new();
        let init = stub_subsystem_step(Initializer::new())
            .step("frame", |ctx| {
                ctx.frame.set(Frame::new(16, 16)?);
                Ok(())
            })
            .step("texture", |_| {
                Err(ShellError::AssetLoad {
                    path: "simulated.png".to_string(),
                    reason: "simulated".to_string(),
                })
            });

        let err = init.run(&mut ctx).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(!ctx.subsystem.is_valid());
        assert!(!ctx.frame.is_valid());
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_missing_asset_file_end_to_end() {
        // The canned texture step against a path that cannot exist: the
        // context must be fully unwound and the error must map to the
        // asset-load exit code.
        let mut ctx = AppContext::new();
        let init = stub_subsystem_step(Initializer::new())
            .step("frame", |ctx| {
                ctx.frame.set(Frame::new(64, 48)?);
                Ok(())
            })
            .with_texture("definitely/not/here.png".to_string());

        let err = init.run(&mut ctx).unwrap_err();
        assert!(matches!(err, ShellError::AssetLoad { .. }));
        assert_eq!(err.exit_code(), 4);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_steps_run_in_declaration_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let order = Rc::new(RefCell::new(Vec::new()));
        let (first, second) = (Rc::clone(&order), Rc::clone(&order));

        let mut ctx = AppContext::new();
        Initializer::new()
            .step("a", move |_| {
                first.borrow_mut().push("a");
                Ok(())
            })
            .step("b", move |_| {
                second.borrow_mut().push("b");
                Ok(())
            })
            .run(&mut ctx)
            .unwrap();

        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_window_step_requires_subsystem() {
        let mut ctx = AppContext::new();
        let err = Initializer::new()
            .with_window(WindowConfig::default())
            .run(&mut ctx)
            .unwrap_err();
        assert!(matches!(err, ShellError::WindowCreation(_)));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_text_texture_step_requires_font() {
        let mut ctx = AppContext::new();
        let err = Initializer::new()
            .with_text_texture("Hello world!".to_string(), Color::BLACK)
            .run(&mut ctx)
            .unwrap_err();
        assert!(matches!(err, ShellError::AssetLoad { .. }));
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut ctx = AppContext::new();
        ctx.frame.set(Frame::new(8, 8).unwrap());
        finalize(&mut ctx);
        finalize(&mut ctx);
        assert!(ctx.is_empty());
    }
}
