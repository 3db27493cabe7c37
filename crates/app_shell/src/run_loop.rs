//! The event loop
//!
//! Two states, `Running` and `Stopped` (terminal). Each iteration drains the
//! events already queued at poll time, dispatches them, runs the
//! application's per-frame update, and then performs exactly one redraw —
//! whether or not any event arrived. Polling never blocks, so frames keep
//! presenting at a steady cadence with no input at all. The iteration that
//! observes the quit signal still presents its frame; the loop exits before
//! the next drain.

use crate::context::Assets;
use crate::events::{Event, Key};
use crate::frame::Frame;
use crate::platform::Shell;

/// What a handler wants the loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep running
    Continue,
    /// Transition to `Stopped` after this iteration's redraw
    Quit,
}

/// Event loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Draining events and presenting frames
    Running,
    /// Terminal; no further iterations run
    Stopped,
}

/// Application hooks driven by the event loop
///
/// Key handlers follow last-write-wins: when several key-downs arrive in one
/// drain, the state set by the last one stands. No key-state tracking.
pub trait Application {
    /// A key was pressed
    fn on_key_down(&mut self, key: Key) -> LoopControl {
        let _ = key;
        LoopControl::Continue
    }

    /// A key was released
    fn on_key_up(&mut self, key: Key) -> LoopControl {
        let _ = key;
        LoopControl::Continue
    }

    /// Called once per iteration, after the drain and before the redraw
    fn update(&mut self) -> LoopControl {
        LoopControl::Continue
    }

    /// Draw the current state onto the frame; called exactly once per
    /// iteration
    fn draw(&mut self, frame: &mut Frame, assets: &Assets);
}

/// Drives an [`Application`] against a [`Shell`]
#[derive(Debug)]
pub struct EventLoop {
    state: LoopState,
    frames_presented: u64,
}

impl EventLoop {
    /// A loop in the `Running` state
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            frames_presented: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames presented so far; one per iteration
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Run until the quit signal is observed
    pub fn run<S: Shell, A: Application>(
        &mut self,
        shell: &mut S,
        frame: &mut Frame,
        assets: &Assets,
        app: &mut A,
    ) {
        log::debug!("event loop started");
        while self.state == LoopState::Running {
            for event in shell.drain_events() {
                self.dispatch(event, app);
            }
            if app.update() == LoopControl::Quit {
                self.state = LoopState::Stopped;
            }
            app.draw(frame, assets);
            shell.present(frame);
            self.frames_presented += 1;
        }
        log::debug!(
            "event loop stopped after {} frame(s)",
            self.frames_presented
        );
    }

    fn dispatch<A: Application>(&mut self, event: Event, app: &mut A) {
        let control = match event {
            Event::Quit => LoopControl::Quit,
            Event::KeyDown(key) => app.on_key_down(key),
            Event::KeyUp(key) => app.on_key_up(key),
        };
        if control == LoopControl::Quit {
            self.state = LoopState::Stopped;
        }
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}
