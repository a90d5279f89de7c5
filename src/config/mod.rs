//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the theme, water goal, drawer animation speed, start screen and
//! hotkey overrides. Health data is never written here.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{ContextHotkeys, HotkeyAction, HotkeyContext};

use crate::error::AppError;
use crate::state::Screen;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/health-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub water_daily_goal: u32,
    pub drawer_animation_ms: u64,
    pub start_screen: Screen,
    start_screen_override: Option<Screen>,
    hotkey_overrides: Option<ContextHotkeys>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_water_daily_goal")]
    pub water_daily_goal: u32,
    #[serde(default = "default_drawer_animation_ms")]
    pub drawer_animation_ms: u64,
    #[serde(default)]
    pub start_screen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkeys: Option<ContextHotkeys>,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_water_daily_goal() -> u32 {
    8
}

fn default_drawer_animation_ms() -> u64 {
    crate::state::drawer::DEFAULT_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            water_daily_goal: default_water_daily_goal(),
            drawer_animation_ms: default_drawer_animation_ms(),
            start_screen: Screen::Home,
            start_screen_override: None,
            hotkey_overrides: None,
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if !file_path.exists() {
            log::debug!("No configuration at {}, using defaults", file_path.display());
            return Ok(());
        }

        let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        if data.water_daily_goal == 0 {
            return Err(ConfigError::InvalidValue {
                key: "water_daily_goal",
                message: "must be greater than zero".to_string(),
            }
            .into());
        }
        self.theme_name = data.theme_name;
        self.water_daily_goal = data.water_daily_goal;
        self.drawer_animation_ms = data.drawer_animation_ms;
        if let Some(name) = data.start_screen {
            self.start_screen = name.parse()?;
        }
        self.hotkey_overrides = data.hotkeys;
        Ok(())
    }

    /// Start on `screen` for this run only. The override is never saved.
    ///
    pub fn override_start_screen(&mut self, screen: Screen) -> &mut Self {
        self.start_screen_override = Some(screen);
        self
    }

    /// Return the screen to mount first: the override if set, otherwise the
    /// configured start screen.
    ///
    pub fn initial_screen(&self) -> Screen {
        self.start_screen_override.unwrap_or(self.start_screen)
    }

    /// Return the default bindings with any configured overrides applied.
    ///
    pub fn hotkeys(&self) -> ContextHotkeys {
        let defaults = hotkeys::default_hotkeys();
        match &self.hotkey_overrides {
            Some(overrides) => defaults.merged(overrides.clone()),
            None => defaults,
        }
    }

    /// Return the drawer slide duration.
    ///
    pub fn drawer_animation(&self) -> Duration {
        Duration::from_millis(self.drawer_animation_ms)
    }

    /// Save the current configuration to disk, creating the directory if
    /// needed.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            water_daily_goal: self.water_daily_goal,
            drawer_animation_ms: self.drawer_animation_ms,
            start_screen: Some(self.start_screen.name().to_string()),
            hotkeys: self.hotkey_overrides.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateError;
    use crossterm::event::KeyCode;

    fn write_config(dir: &Path, contents: &str) {
        fs::write(dir.join(FILE_NAME), contents).unwrap();
    }

    #[test]
    fn load_without_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.water_daily_goal, 8);
        assert_eq!(config.drawer_animation(), Duration::from_millis(300));
        assert_eq!(config.start_screen, Screen::Home);
        assert_eq!(config.hotkeys(), hotkeys::default_hotkeys());
    }

    #[test]
    fn load_reads_settings() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "theme_name: dracula\nwater_daily_goal: 10\ndrawer_animation_ms: 150\nstart_screen: Medications\n",
        );
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(config.water_daily_goal, 10);
        assert_eq!(config.drawer_animation_ms, 150);
        assert_eq!(config.start_screen, Screen::Medications);
    }

    #[test]
    fn load_rejects_unknown_start_screen() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "start_screen: Settings\n");
        let mut config = Config::new();
        let err = config.load(dir.path().to_str()).unwrap_err();
        assert!(matches!(err, AppError::State(StateError::UnknownScreen(_))));
    }

    #[test]
    fn load_rejects_zero_water_goal() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "water_daily_goal: 0\n");
        let mut config = Config::new();
        let err = config.load(dir.path().to_str()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn load_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "water_daily_goal: [not a number\n");
        let mut config = Config::new();
        assert!(matches!(
            config.load(dir.path().to_str()),
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn hotkey_overrides_merge_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "hotkeys:\n  global:\n    open_drawer:\n      code: Tab\n",
        );
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        let hotkeys = config.hotkeys();
        assert_eq!(
            hotkeys.global.get(&HotkeyAction::OpenDrawer).map(|h| h.code),
            Some(KeyCode::Tab)
        );
        assert!(hotkeys.global.contains_key(&HotkeyAction::Quit));
        assert!(!hotkeys.screen.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_theme() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let mut config = Config::new();
        config.load(nested.to_str()).unwrap();
        config.theme_name = "rose-pine".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(nested.to_str()).unwrap();
        assert_eq!(reloaded.theme_name, "rose-pine");
    }

    #[test]
    fn start_screen_override_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "start_screen: Home\n");
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config.override_start_screen(Screen::Medications);
        assert_eq!(config.initial_screen(), Screen::Medications);
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.path().to_str()).unwrap();
        assert_eq!(reloaded.start_screen, Screen::Home);
        assert_eq!(reloaded.initial_screen(), Screen::Home);
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
