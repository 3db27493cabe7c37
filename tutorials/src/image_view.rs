//! Example 03: rendering an image
//!
//! Loads a PNG at startup and stretch-blits it over the whole window every
//! frame. A missing or undecodable file aborts initialization with the
//! asset-load exit code. Quit with Escape or by closing the window.

use app_shell::{
    finalize, AppContext, Application, Assets, Color, EventLoop, Frame, Initializer, Key,
    LoopControl, ShellConfig,
};
use std::process;

const TITLE: &str = "Example 03: Rendering an image";

struct ImageApp;

impl Application for ImageApp {
    fn on_key_down(&mut self, key: Key) -> LoopControl {
        if key == Key::Escape {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }

    fn draw(&mut self, frame: &mut Frame, assets: &Assets) {
        frame.fill(Color::rgb(0xee, 0xee, 0xee));
        if let Some(texture) = assets.texture.get() {
            frame.blit_stretched(texture);
        }
    }
}

fn main() {
    app_shell::logging::init();

    let mut config = ShellConfig::load_or_default("shell.toml");
    config.window.title = TITLE.to_string();

    let mut ctx = AppContext::new();
    let init = Initializer::new()
        .with_video_subsystem()
        .with_window(config.window)
        .with_frame()
        .with_texture(config.assets.image);
    if let Err(err) = init.run(&mut ctx) {
        process::exit(err.exit_code());
    }

    let mut app = ImageApp;
    let mut event_loop = EventLoop::new();
    if let (Some(window), Some(frame)) = (ctx.window.get_mut(), ctx.frame.get_mut()) {
        event_loop.run(window, frame, &ctx.assets, &mut app);
    }

    finalize(&mut ctx);
}
