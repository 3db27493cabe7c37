//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Respects `RUST_LOG`; with no configuration only errors are printed,
/// which keeps failure diagnostics visible by default.
pub fn init() {
    env_logger::init();
}
