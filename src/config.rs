//! Shell configuration
//!
//! Loaded from JSON, the same way the rest of the game data lives under
//! `assets/config/`. Every field has a default, so a partial file (or no file
//! at all) is fine.
//!
//! # Lookup order
//!
//! 1. `<config dir>/tank-and-gun/shell.json` (per-user override)
//! 2. `assets/config/shell.json` (shipped with the game)
//! 3. Built-in defaults

use crate::error::ConfigError;
use crate::scene::{Destination, SceneId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BUNDLED_CONFIG: &str = "assets/config/shell.json";
const USER_CONFIG_DIR: &str = "tank-and-gun";
const CONFIG_FILE_NAME: &str = "shell.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub fonts: FontsConfig,
    /// Scene shown at startup, by identifier
    pub start_scene: String,
    pub menu: MenuConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub menu: FontConfig,
    pub title: FontConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub path: PathBuf,
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Vertical gap between labels in pixels
    pub label_spacing: u32,
    pub items: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub label: String,
    pub destination: String,
}

/// Placeholder game scene tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay before the game scene sends the player back to the menu
    pub return_delay_ms: u64,
    /// Background scroll in pixels per frame
    pub scroll_speed: u32,
    /// Width of one procedural background tile
    pub tile_size: u32,
    /// Optional image drawn instead of the procedural strip
    pub background_image: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            window: WindowConfig::default(),
            fonts: FontsConfig::default(),
            start_scene: SceneId::Title.to_string(),
            menu: MenuConfig::default(),
            game: GameConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Tank & Gun".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

impl Default for FontsConfig {
    fn default() -> Self {
        FontsConfig {
            menu: FontConfig {
                path: PathBuf::from("assets/fonts/menu.ttf"),
                size: 40,
            },
            title: FontConfig {
                path: PathBuf::from("assets/fonts/Go-Bold.ttf"),
                size: 120,
            },
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            label_spacing: 20,
            items: vec![
                MenuItemConfig {
                    label: "Play".to_string(),
                    destination: SceneId::Game.to_string(),
                },
                MenuItemConfig {
                    label: "Quit".to_string(),
                    destination: Destination::EXIT.to_string(),
                },
            ],
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            return_delay_ms: 5000,
            scroll_speed: 2,
            tile_size: 40,
            background_image: None,
        }
    }
}

impl ShellConfig {
    /// Reads and validates a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ShellConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the first config found in the lookup order, or the defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_first(&Self::candidate_paths())
    }

    fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in paths {
            if path.exists() {
                log::info!("Loading shell config from {}", path.display());
                return Self::load_from_file(path);
            }
        }

        log::info!("No shell config found, using defaults");
        let config = ShellConfig::default();
        config.validate()?;
        Ok(config)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(BUNDLED_CONFIG));
        paths
    }

    /// Scene the host starts in
    pub fn start_scene_id(&self) -> Result<SceneId, ConfigError> {
        match self.start_scene.parse::<Destination>() {
            Ok(Destination::Scene(id)) => Ok(id),
            Ok(Destination::Exit) => Err(ConfigError::Invalid(
                "start_scene cannot be the exit destination".to_string(),
            )),
            Err(_) => Err(ConfigError::Invalid(format!(
                "unknown start_scene {:?}",
                self.start_scene
            ))),
        }
    }

    /// Checks everything that would otherwise only fail mid-game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} is empty",
                self.window.width, self.window.height
            )));
        }

        for (name, font) in [("menu", &self.fonts.menu), ("title", &self.fonts.title)] {
            if font.size == 0 {
                return Err(ConfigError::Invalid(format!("{} font size is zero", name)));
            }
        }

        self.start_scene_id()?;

        for item in &self.menu.items {
            if item.destination.parse::<Destination>().is_err() {
                return Err(ConfigError::Invalid(format!(
                    "menu item {:?} points to unknown destination {:?}",
                    item.label, item.destination
                )));
            }
        }

        if self.menu.label_spacing > self.window.height {
            return Err(ConfigError::Invalid(format!(
                "menu label_spacing {} is taller than the window ({})",
                self.menu.label_spacing, self.window.height
            )));
        }

        if self.game.scroll_speed > self.window.width {
            return Err(ConfigError::Invalid(format!(
                "game scroll_speed {} is wider than the window ({})",
                self.game.scroll_speed, self.window.width
            )));
        }

        if self.game.tile_size == 0 {
            return Err(ConfigError::Invalid("game tile_size is zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Writes `content` to a fresh file under the system temp dir
    fn temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tank-and-gun-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_scene_id().unwrap(), SceneId::Title);
        assert_eq!(config.menu.items.len(), 2);
        assert_eq!(config.menu.items[1].destination, "exit");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "window": { "width": 400, "height": 250 }, "start_scene": "menu" }"#;
        let config: ShellConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.window.width, 400);
        assert_eq!(config.window.height, 250);
        assert_eq!(config.window.title, "Tank & Gun");
        assert_eq!(config.start_scene_id().unwrap(), SceneId::Menu);
        assert_eq!(config.game.return_delay_ms, 5000);
    }

    #[test]
    fn test_unknown_menu_destination_rejected() {
        let mut config = ShellConfig::default();
        config.menu.items.push(MenuItemConfig {
            label: "Scores".to_string(),
            destination: "scores".to_string(),
        });

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_exit_is_not_a_start_scene() {
        let config = ShellConfig {
            start_scene: "exit".to_string(),
            ..ShellConfig::default()
        };
        assert!(config.start_scene_id().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ShellConfig::load_from_file("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_file_reads_valid_config() {
        let path = temp_config(
            "valid.json",
            r#"{
                "start_scene": "menu",
                "menu": {
                    "label_spacing": 8,
                    "items": [{ "label": "Start", "destination": "game" }]
                },
                "game": { "return_delay_ms": 100 }
            }"#,
        );

        let config = ShellConfig::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.start_scene_id().unwrap(), SceneId::Menu);
        assert_eq!(config.menu.label_spacing, 8);
        assert_eq!(config.menu.items.len(), 1);
        assert_eq!(config.menu.items[0].label, "Start");
        assert_eq!(config.game.return_delay_ms, 100);
        assert_eq!(config.game.tile_size, 40);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_config("malformed.json", r#"{ "window": { "width": "#);

        let result = ShellConfig::load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_invalid_file_fails_validation() {
        let path = temp_config(
            "invalid.json",
            r#"{ "menu": { "items": [{ "label": "Scores", "destination": "scores" }] } }"#,
        );

        let result = ShellConfig::load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let paths = vec![
            PathBuf::from("does/not/exist.json"),
            PathBuf::from("also/missing/shell.json"),
        ];

        let config = ShellConfig::load_first(&paths).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_uses_first_existing_file() {
        let path = temp_config("first.json", r#"{ "window": { "width": 640 } }"#);
        let paths = vec![PathBuf::from("does/not/exist.json"), path.clone()];

        let config = ShellConfig::load_first(&paths);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().window.width, 640);
    }

    #[test]
    fn test_label_spacing_taller_than_window_rejected() {
        let mut config = ShellConfig::default();
        config.menu.label_spacing = u32::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.menu.label_spacing = config.window.height;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scroll_speed_wider_than_window_rejected() {
        let mut config = ShellConfig::default();
        config.game.scroll_speed = config.window.width + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.game.scroll_speed = config.window.width;
        assert!(config.validate().is_ok());
    }
}
