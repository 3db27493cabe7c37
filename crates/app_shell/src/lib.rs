//! # App Shell
//!
//! Resource-lifecycle core for small windowed programs: a typed resource
//! registry, an initializer that unwinds on first failure, a poll-driven
//! event loop, and a finalizer that releases everything in reverse
//! acquisition order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use app_shell::{
//!     finalize, AppContext, Application, Assets, Color, EventLoop, Frame, Initializer,
//!     ShellConfig,
//! };
//!
//! struct WhiteScreen;
//!
//! impl Application for WhiteScreen {
//!     fn draw(&mut self, frame: &mut Frame, _assets: &Assets) {
//!         frame.fill(Color::WHITE);
//!     }
//! }
//!
//! fn main() {
//!     app_shell::logging::init();
//!     let config = ShellConfig::load_or_default("shell.toml");
//!
//!     let mut ctx = AppContext::new();
//!     let init = Initializer::new()
//!         .with_video_subsystem()
//!         .with_window(config.window)
//!         .with_frame();
//!     if let Err(err) = init.run(&mut ctx) {
//!         std::process::exit(err.exit_code());
//!     }
//!
//!     let mut app = WhiteScreen;
//!     let mut event_loop = EventLoop::new();
//!     if let (Some(window), Some(frame)) = (ctx.window.get_mut(), ctx.frame.get_mut()) {
//!         event_loop.run(window, frame, &ctx.assets, &mut app);
//!     }
//!     finalize(&mut ctx);
//! }
//! ```

pub mod assets;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod frame;
pub mod lifecycle;
pub mod logging;
pub mod platform;
pub mod registry;
pub mod run_loop;

pub use assets::{FontFace, Texture};
pub use color::Color;
pub use config::{AssetConfig, ConfigError, ShellConfig, WindowConfig};
pub use context::{AppContext, Assets};
pub use error::{ShellError, ShellResult};
pub use events::{Event, Key};
pub use frame::Frame;
pub use lifecycle::{finalize, Initializer};
pub use platform::{Shell, VideoSubsystem, WindowHandle};
pub use registry::Slot;
pub use run_loop::{Application, EventLoop, LoopControl, LoopState};
