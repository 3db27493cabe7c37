//! Platform layer: subsystem guard, window handle, and the trait the event
//! loop drives
//!
//! The event loop never talks to the windowing library directly; it sees a
//! [`Shell`], which the real [`WindowHandle`] implements and which tests
//! implement with scripted fakes.

mod subsystem;
mod window;

pub use subsystem::VideoSubsystem;
pub use window::WindowHandle;

use crate::events::Event;
use crate::frame::Frame;

/// Platform face of the event loop
pub trait Shell {
    /// Drain the events queued at the time of the call, without blocking
    ///
    /// Events arriving during the drain are reported by a later call, never
    /// the same one.
    fn drain_events(&mut self) -> Vec<Event>;

    /// Present one finished frame
    fn present(&mut self, frame: &Frame);
}
