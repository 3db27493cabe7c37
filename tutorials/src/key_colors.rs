//! Example 02: handling events
//!
//! The arrow keys select the fill color (Up=red, Right=yellow, Down=green,
//! Left=blue); releasing any key resets to white. When two direction keys
//! overlap, the last key-down wins. Quit with Escape or by closing the
//! window.

use app_shell::{
    finalize, AppContext, Application, Assets, Color, EventLoop, Frame, Initializer, Key,
    LoopControl, ShellConfig,
};
use std::process;

const TITLE: &str = "Example 02: Handling events";

struct ColorApp {
    current: Color,
}

impl Application for ColorApp {
    fn on_key_down(&mut self, key: Key) -> LoopControl {
        match key {
            Key::Up => self.current = Color::RED,
            Key::Right => self.current = Color::YELLOW,
            Key::Down => self.current = Color::GREEN,
            Key::Left => self.current = Color::BLUE,
            Key::Escape => return LoopControl::Quit,
        }
        LoopControl::Continue
    }

    fn on_key_up(&mut self, _key: Key) -> LoopControl {
        self.current = Color::WHITE;
        LoopControl::Continue
    }

    fn draw(&mut self, frame: &mut Frame, _assets: &Assets) {
        frame.fill(self.current);
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
        .with_frame();
    if let Err(err) = init.run(&mut ctx) {
        process::exit(err.exit_code());
    }

    let mut app = ColorApp {
        current: Color::WHITE,
    };
    let mut event_loop = EventLoop::new();
    if let (Some(window), Some(frame)) = (ctx.window.get_mut(), ctx.frame.get_mut()) {
        event_loop.run(window, frame, &ctx.assets, &mut app);
    }

    finalize(&mut ctx);
}
