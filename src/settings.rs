//! Settings loaded from TOML
//!
//! Read from ~/.config/tetris-stack/settings.toml (or platform equivalent).
//! The file is optional and never written by the program.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Simulator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Console output settings
    pub display: DisplaySettings,
    /// Piece generator settings
    pub generator: GeneratorSettings,
}

/// Console output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Color piece tags by type
    pub color: bool,
    /// Order the reserve is listed in
    pub stack_order: StackOrder,
}

/// Which end of the reserve is printed first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackOrder {
    #[default]
    TopFirst,
    BottomFirst,
}

/// Piece generator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Fixed seed for reproducible sessions; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            color: true,
            stack_order: StackOrder::TopFirst,
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tetris-stack", "tetris-stack")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load settings from the config dir, or fall back to defaults.
    /// Never writes anything.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("Could not determine config directory, using default settings");
                Self::default()
            }
        }
    }

    /// Read settings from `path`; a missing or broken file gives defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Could not read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.display.color);
        assert_eq!(settings.display.stack_order, StackOrder::TopFirst);
        assert_eq!(settings.generator.seed, None);
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml_str(
            r#"
            [display]
            stack_order = "bottom-first"

            [generator]
            seed = 1234
            "#,
        )
        .unwrap();
        assert!(settings.display.color);
        assert_eq!(settings.display.stack_order, StackOrder::BottomFirst);
        assert_eq!(settings.generator.seed, Some(1234));
    }

    #[test]
    fn test_bad_stack_order_is_an_error() {
        let result = Settings::from_toml_str("[display]\nstack_order = \"sideways\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults_without_creating_it() {
        let path = std::env::temp_dir()
            .join(format!("tetris-stack-test-{}", std::process::id()))
            .join("settings.toml");
        assert_eq!(Settings::load_from(&path), Settings::default());
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_load_from_reads_file() {
        let dir = std::env::temp_dir().join(format!("tetris-stack-read-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        fs::write(&path, "[display]\ncolor = false\n").unwrap();
        let settings = Settings::load_from(&path);
        fs::remove_dir_all(&dir).unwrap();
        assert!(!settings.display.color);
    }

    #[test]
    fn test_serialized_defaults_parse_back() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), Settings::default());
    }
}
