//! Client configuration resource.
//!
//! Settings loaded from an INI configuration file, with safe defaults so
//! startup never depends on the file existing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! fpscap = 120
//!
//! [client]
//! assets = ./assets
//! bundle = ./assets/bundle.ini
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_FPS_CAP: u32 = 120;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_BUNDLE_PATH: &str = "./assets/bundle.ini";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Client configuration resource.
///
/// `fps_cap` is the target frame rate enforced by
/// [`crate::systems::pacing::pace_frame`]: `0` means uncapped, values in
/// `1..=240` cap the frame rate, anything else disables capping for safety.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second; see type docs for the recognized range.
    pub fps_cap: u32,
    /// Root directory of game assets.
    pub assets_dir: PathBuf,
    /// Path to the localization bundle file.
    pub bundle_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            fps_cap: DEFAULT_FPS_CAP,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            bundle_path: PathBuf::from(DEFAULT_BUNDLE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(cap) = config.getuint("window", "fpscap").ok().flatten() {
            self.fps_cap = cap as u32;
        }

        // [client] section
        if let Some(dir) = config.get("client", "assets") {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(path) = config.get("client", "bundle") {
            self.bundle_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} window, fpscap={}, assets={:?}",
            self.window_width, self.window_height, self.fps_cap, self.assets_dir
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "fpscap", Some(self.fps_cap.to_string()));
        config.set(
            "client",
            "assets",
            Some(self.assets_dir.display().to_string()),
        );
        config.set(
            "client",
            "bundle",
            Some(self.bundle_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Resolve a path relative to the assets directory.
    pub fn asset_path(&self, relative: &str) -> PathBuf {
        self.assets_dir.join(relative)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.fps_cap, 120);
        assert!(config.window_width > 0 && config.window_height > 0);
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path("./definitely-not-here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.fps_cap, 120);
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn asset_path_joins_under_assets_dir() {
        let config = GameConfig::new();
        let path = config.asset_path("sprites/sprites.png");
        assert!(path.ends_with("sprites/sprites.png"));
        assert!(path.starts_with(&config.assets_dir));
    }
}
