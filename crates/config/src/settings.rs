// Theme preferences
// Loaded from ~/.config/edtheme/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // UI theme (one of the names in the UI theme list)
    #[serde(rename = "ui.theme")]
    pub ui_theme: String,

    // Editor theme override; None = follow the UI theme
    #[serde(rename = "editor.theme", skip_serializing_if = "Option::is_none")]
    pub editor_theme: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_theme: edtheme_registry::ThemeId::DEFAULT.as_str().to_string(),
            editor_theme: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("edtheme");
        config_dir.join("settings.json")
    }

    /// Load settings from the default path, creating a commented default file
    /// on first run
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            Self::create_default_file(&path);
            return Self::default();
        }
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults.
    /// A missing file is not an error; unreadable or malformed files are
    /// logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}: {e}; using default settings", path.display());
                Self::default()
            }
        }
    }

    /// Strict load: every failure is returned
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse settings JSON. Lines starting with `//` are comments.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        serde_json::from_str(&cleaned).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save current settings to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        fs::write(path, json).map_err(|e| ConfigError::Io(e.to_string()))?;
        log::debug!("saved settings to {}", path.display());
        Ok(())
    }

    /// Name the editor theme should be resolved from
    pub fn editor_theme_name(&self) -> &str {
        self.editor_theme.as_deref().unwrap_or(&self.ui_theme)
    }

    /// Create default settings file with comments
    fn create_default_file(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Error creating config directory: {e}");
                return;
            }
        }

        let default_config = r#"{
    // UI theme, one of: onedarkpro, dark, emerald, forest, dracula, night, lemonade, winter
    "ui.theme": "dark"

    // Uncomment to pin the editor theme instead of following the UI theme
    // ,"editor.theme": "dracula"
}
"#;

        if let Err(e) = fs::write(path, default_config) {
            log::warn!("Error writing default settings.json: {e}");
        }
    }

    /// Get the config file path for display/opening
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }
}
