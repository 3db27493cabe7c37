//! Video subsystem acquisition guard
//!
//! Must be acquired before any window is opened and shut down after the last
//! window is gone; the window constructor takes a reference to the guard so
//! the ordering is enforced at compile time.

use crate::error::ShellResult;

/// Guard for the platform's window-management facility
///
/// Dropping the guard shuts the subsystem down.
#[derive(Debug)]
pub struct VideoSubsystem {
    _guard: (),
}

impl VideoSubsystem {
    /// Acquire the video subsystem
    ///
    /// # Errors
    /// Returns [`crate::ShellError::Subsystem`] when no display server is
    /// reachable, which is what a headless run hits.
    pub fn acquire() -> ShellResult<Self> {
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if std::env::var_os("DISPLAY").is_none()
                && std::env::var_os("WAYLAND_DISPLAY").is_none()
            {
                return Err(crate::error::ShellError::Subsystem(
                    "no display server reachable (DISPLAY and WAYLAND_DISPLAY are unset)"
                        .to_string(),
                ));
            }
        }
        log::debug!("video subsystem acquired");
        Ok(Self { _guard: () })
    }

    #[cfg(test)]
    pub(crate) fn stub() -> Self {
        Self { _guard: () }
    }
}

impl Drop for VideoSubsystem {
    fn drop(&mut self) {
        log::debug!("video subsystem shut down");
    }
}
