//! Example 01: creating a window
//!
//! Opens the main window, fills it with white, and exits on its own after a
//! couple of seconds (or earlier if the window is closed).

use app_shell::{
    finalize, AppContext, Application, Assets, Color, EventLoop, Frame, Initializer, LoopControl,
    ShellConfig,
};
use std::process;
use std::time::{Duration, Instant};

const TITLE: &str = "Example 01: Creating a window";
const LIFETIME: Duration = Duration::from_secs(2);

struct HelloApp {
    started: Instant,
}

impl Application for HelloApp {
    fn update(&mut self) -> LoopControl {
        if self.started.elapsed() >= LIFETIME {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }

    fn draw(&mut self, frame: &mut Frame, _assets: &Assets) {
        frame.fill(Color::WHITE);
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

    let mut app = HelloApp {
        started: Instant::now(),
    };
    let mut event_loop = EventLoop::new();
    if let (Some(window), Some(frame)) = (ctx.window.get_mut(), ctx.frame.get_mut()) {
        event_loop.run(window, frame, &ctx.assets, &mut app);
    }

    finalize(&mut ctx);
}
