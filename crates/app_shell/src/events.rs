//! Input and system events delivered to the event loop

/// Keys the tutorials care about
///
/// Anything the platform reports outside this set is dropped at the
/// translation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Escape
    Escape,
}

/// An event drained from the platform queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user or OS requested termination
    Quit,
    /// A key transitioned to pressed
    KeyDown(Key),
    /// A key transitioned to released
    KeyUp(Key),
}
