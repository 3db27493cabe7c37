//! Window handle over the minifb backend
//!
//! Wraps the library window with proper resource management: creation maps
//! the library error into the structured taxonomy, and the handle implements
//! [`Shell`] so the event loop stays backend-agnostic.

use crate::config::WindowConfig;
use crate::error::{ShellError, ShellResult};
use crate::events::{Event, Key};
use crate::frame::Frame;
use crate::platform::{Shell, VideoSubsystem};
use minifb::{KeyRepeat, WindowOptions};
use std::time::Duration;

/// The main window
pub struct WindowHandle {
    window: minifb::Window,
    width: usize,
    height: usize,
    alive: bool,
}

impl std::fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowHandle")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("alive", &self.alive)
            .finish()
    }
}

impl WindowHandle {
    /// Open a window
    ///
    /// Takes the subsystem guard by reference so a window can never outlive
    /// the subsystem it was created under.
    ///
    /// # Errors
    /// Returns [`ShellError::WindowCreation`] when the platform refuses.
    pub fn open(_subsystem: &VideoSubsystem, config: &WindowConfig) -> ShellResult<Self> {
        let width = config.width as usize;
        let height = config.height as usize;

        let mut window = minifb::Window::new(
            &config.title,
            width,
            height,
            WindowOptions::default(),
        )
        .map_err(|e| ShellError::WindowCreation(e.to_string()))?;

        if config.target_fps > 0 {
            window.limit_update_rate(Some(Duration::from_secs_f64(
                1.0 / f64::from(config.target_fps),
            )));
        }

        log::info!("opened window '{}' at {}x{}", config.title, width, height);
        Ok(Self {
            window,
            width,
            height,
            alive: true,
        })
    }

    /// Client area width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Client area height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Shell for WindowHandle {
    fn drain_events(&mut self) -> Vec<Event> {
        if !self.alive || !self.window.is_open() {
            self.alive = false;
            return vec![Event::Quit];
        }

        let mut events = Vec::new();
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            if let Some(key) = translate_key(key) {
                events.push(Event::KeyDown(key));
            }
        }
        for key in self.window.get_keys_released() {
            if let Some(key) = translate_key(key) {
                events.push(Event::KeyUp(key));
            }
        }
        events
    }

    fn present(&mut self, frame: &Frame) {
        if !self.alive {
            return;
        }
        // Presenting also pumps the platform's input state.
        if let Err(err) = self
            .window
            .update_with_buffer(frame.pixels(), frame.width(), frame.height())
        {
            // No error crosses the event-loop boundary; a dying window folds
            // into the quit path on the next drain.
            log::warn!("presentation failed, treating window as closed: {err}");
            self.alive = false;
        }
    }
}

fn translate_key(key: minifb::Key) -> Option<Key> {
    match key {
        minifb::Key::Up => Some(Key::Up),
        minifb::Key::Down => Some(Key::Down),
        minifb::Key::Left => Some(Key::Left),
        minifb::Key::Right => Some(Key::Right),
        minifb::Key::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_translation_covers_the_tutorial_set() {
        assert_eq!(translate_key(minifb::Key::Up), Some(Key::Up));
        assert_eq!(translate_key(minifb::Key::Down), Some(Key::Down));
        assert_eq!(translate_key(minifb::Key::Left), Some(Key::Left));
        assert_eq!(translate_key(minifb::Key::Right), Some(Key::Right));
        assert_eq!(translate_key(minifb::Key::Escape), Some(Key::Escape));
        assert_eq!(translate_key(minifb::Key::A), None);
        assert_eq!(translate_key(minifb::Key::Space), None);
    }
}
