//! Configuration file support for ribbon
//!
//! Config file location: `~/.config/ribbon/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [layout]
//! line_height = 18.0
//! width = 32.0
//! fill = "#80808033"
//! stroke = "#80808059"
//! ```

use ribbon_core::LayoutOverrides;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutOverrides,
}

impl Config {
    /// Get all possible config file paths in priority order
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG_CONFIG_HOME (if set)
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("ribbon").join("config.toml"));
        }

        // 2. ~/.config/ribbon/config.toml (XDG default, works on all platforms)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("ribbon").join("config.toml"));
        }

        // 3. Platform-specific config dir (~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("ribbon").join("config.toml");
            // Avoid duplicate if it's the same as ~/.config
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// Get the first existing config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|p| p.exists())
    }

    /// Load config from XDG config path
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    fn parse(content: &str) -> Option<Self> {
        toml::from_str(content)
            .map_err(|e| {
                eprintln!("Warning: Failed to parse config: {}", e);
                e
            })
            .ok()
    }
}
