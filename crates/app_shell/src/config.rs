//! Configuration for the tutorial programs
//!
//! A small TOML/RON file (`shell.toml` by convention) controls the window
//! and asset paths. Everything has a compiled-in default so the tutorials
//! run from a bare checkout.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Client area width in pixels
    pub width: u32,

    /// Client area height in pixels
    pub height: u32,

    /// Presentation rate cap; `0` disables the cap
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tutorial".to_string(),
            width: 640,
            height: 480,
            target_fps: 60,
        }
    }
}

/// Asset paths and parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// PNG shown by the image tutorial
    pub image: String,

    /// TrueType font used by the text tutorial
    pub font: String,

    /// Font size in pixels
    pub font_size: f32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            image: "assets/colors.png".to_string(),
            font: "assets/Roboto-Medium.ttf".to_string(),
            font_size: 16.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Asset configuration
    pub assets: AssetConfig,
}

impl ShellConfig {
    /// Load configuration from a `.toml` or `.ron` file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_named(path, &contents)
    }

    /// Load configuration, falling back to defaults when the file is absent
    /// or unreadable
    pub fn load_or_default(path: &str) -> Self {
        if !Path::new(path).exists() {
            log::debug!("no config file at {path}, using defaults");
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring config file {path}: {err}");
                Self::default()
            }
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn parse_named(path: &str, contents: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.window.target_fps, 60);
        assert!(config.assets.image.ends_with(".png"));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = ShellConfig::parse_named(
            "shell.toml",
            "[window]\nwidth = 800\nheight = 600\n",
        )
        .unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        // Unspecified fields keep their defaults.
        assert_eq!(config.window.target_fps, 60);
        assert_eq!(config.assets.font_size, 16.0);
    }

    #[test]
    fn test_parse_rejects_unknown_extension() {
        let result = ShellConfig::parse_named("shell.yaml", "window: {}");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_reports_bad_toml() {
        let result = ShellConfig::parse_named("shell.toml", "[window\nwidth=1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ShellConfig::default();
        config.window.title = "Round trip".to_string();
        config.window.target_fps = 30;
        config.assets.font_size = 24.0;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed = ShellConfig::parse_named("shell.toml", &serialized).unwrap();
        assert_eq!(parsed.window.title, "Round trip");
        assert_eq!(parsed.window.target_fps, 30);
        assert_eq!(parsed.assets.font_size, 24.0);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = ShellConfig::load_or_default("does/not/exist.toml");
        assert_eq!(config.window.width, 640);
    }
}
