//! Example 04: rendering text
//!
//! Loads a TrueType font at startup, rasterizes a line of text into a
//! texture once, and draws it centered on a white background every frame.
//! Quit with Escape or by closing the window.

use app_shell::{
    finalize, AppContext, Application, Assets, Color, EventLoop, Frame, Initializer, Key,
    LoopControl, ShellConfig,
};
use std::process;

const TITLE: &str = "Example 04: Rendering text";
const BANNER: &str = "Hello world!";

struct TextApp;

impl Application for TextApp {
    fn on_key_down(&mut self, key: Key) -> LoopControl {
        if key == Key::Escape {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }

    fn draw(&mut self, frame: &mut Frame, assets: &Assets) {
        frame.fill(Color::WHITE);
        if let Some(texture) = assets.texture.get() {
            frame.blit_centered(texture);
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
        .with_font(config.assets.font, config.assets.font_size)
        .with_text_texture(BANNER.to_string(), Color::BLACK);
    if let Err(err) = init.run(&mut ctx) {
        process::exit(err.exit_code());
    }

    let mut app = TextApp;
    let mut event_loop = EventLoop::new();
    if let (Some(window), Some(frame)) = (ctx.window.get_mut(), ctx.frame.get_mut()) {
        event_loop.run(window, frame, &ctx.assets, &mut app);
    }

    finalize(&mut ctx);
}
