// ABOUTME: Color configuration handling.
// ABOUTME: Loads and saves the color scheme and bold policy from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{ColorScheme, ColorTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color scheme (16 ANSI colors + fg/bg)
    pub color_scheme: ColorScheme,

    /// Render bold text with the bright half of the 16-color table
    pub bold_is_bright: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            bold_is_bright: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigPath,
}

impl Config {
    /// Get the default config file path (~/.config/tcolor/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tcolor").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), scheme = %config.color_scheme.name, "Loaded config");
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(ConfigError::ReadError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Save config to a path
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigPath)?;
        self.save(&path)?;
        Ok(path)
    }

    /// Build the table that text colors resolve against
    pub fn color_table(&self) -> ColorTable {
        self.color_scheme.table(self.bold_is_bright)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb24;

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            color_scheme: ColorScheme::ansi(),
            bold_is_bright: false,
        };

        let temp_path = std::env::temp_dir()
            .join("tcolor_test_config_roundtrip")
            .join("config.toml");

        config.save(&temp_path).unwrap();
        let loaded = Config::load(&temp_path).unwrap();
        assert_eq!(loaded, config);

        // Colors are stored as readable hex strings
        let text = std::fs::read_to_string(&temp_path).unwrap();
        assert!(text.contains("#cc3333"));

        // Cleanup
        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("bold_is_bright = false\n").unwrap();
        assert!(!config.bold_is_bright);
        assert_eq!(config.color_scheme, ColorScheme::amber());
    }

    #[test]
    fn test_custom_scheme_from_toml() {
        let text = r##"
            [color_scheme]
            name = "Mono"
            foreground = "#ffffff"
            background = "#000000"
            colors = [
                "#000000", "#111111", "#222222", "#333333",
                "#444444", "#555555", "#666666", "#777777",
                "#888888", "#999999", "#aaaaaa", "#bbbbbb",
                "#cccccc", "#dddddd", "#eeeeee", "#ffffff",
            ]
        "##;
        let config: Config = toml::from_str(text).unwrap();
        assert!(config.bold_is_bright);

        let table = config.color_table();
        assert_eq!(table.palette()[3], Rgb24::new(0x33, 0x33, 0x33));
        assert_eq!(table.palette()[11], Rgb24::new(0xbb, 0xbb, 0xbb));
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let text = "[color_scheme]\nname = \"x\"\nforeground = \"red\"\n";
        assert!(toml::from_str::<Config>(text).is_err());

        let temp_path = std::env::temp_dir().join("tcolor_test_bad_config.toml");
        std::fs::write(&temp_path, text).unwrap();
        assert!(matches!(
            Config::load(&temp_path),
            Err(ConfigError::ParseError(_))
        ));
        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("tcolor_test_does_not_exist.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("tcolor/config.toml"));
        }
    }
}
