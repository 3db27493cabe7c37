//! Error taxonomy for the initialization sequence
//!
//! Every initializer step maps to exactly one variant, so callers can branch
//! on structure instead of re-deriving which step failed from the message.

use thiserror::Error;

/// Result alias used throughout the crate
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors that can occur while bringing up or using the shell
///
/// The event loop itself has no failure path; once initialization succeeds
/// the only way out is the quit signal.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The platform video subsystem could not be acquired
    #[error("platform subsystem unavailable: {0}")]
    Subsystem(String),

    /// Window creation was refused by the platform
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// The drawing surface could not be created
    #[error("renderer creation failed: {0}")]
    RendererCreation(String),

    /// An asset file was missing or could not be decoded
    #[error("asset load failed ({path}): {reason}")]
    AssetLoad {
        /// Path of the asset that failed to load
        path: String,
        /// Underlying library diagnostic
        reason: String,
    },
}

impl ShellError {
    /// Process exit code for this failure, one per initializer step in
    /// acquisition order. `0` is reserved for a normal quit.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Subsystem(_) => 1,
            Self::WindowCreation(_) => 2,
            Self::RendererCreation(_) => 3,
            Self::AssetLoad { .. } => 4,
        }
    }

    /// Short name of the initializer step this error belongs to
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Subsystem(_) => "subsystem init",
            Self::WindowCreation(_) => "window creation",
            Self::RendererCreation(_) => "renderer creation",
            Self::AssetLoad { .. } => "asset load",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            ShellError::Subsystem(String::new()),
            ShellError::WindowCreation(String::new()),
            ShellError::RendererCreation(String::new()),
            ShellError::AssetLoad {
                path: String::new(),
                reason: String::new(),
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(ShellError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|&code| code != 0));
    }

    #[test]
    fn test_display_includes_diagnostic() {
        let err = ShellError::AssetLoad {
            path: "assets/colors.png".to_string(),
            reason: "no such file".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("assets/colors.png"));
        assert!(text.contains("no such file"));
    }
}
