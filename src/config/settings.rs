//! Application configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Window dimensions
    pub window: WindowConfig,
    /// Asset directories the option catalogs are scanned from
    #[serde(default)]
    pub assets: AssetConfig,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github", "rec-intake")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 760,
        }
    }
}

/// Asset directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory holding the lecturer images (`id_name..._kind.png`)
    #[serde(default = "default_lecturer_image_dir")]
    pub lecturer_image_dir: PathBuf,
    /// Directory holding the `pattern*` template directories
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
}

fn default_lecturer_image_dir() -> PathBuf {
    PathBuf::from("assets/lecturer-images")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            lecturer_image_dir: default_lecturer_image_dir(),
            template_dir: default_template_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let loaded: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.window.width, config.window.width);
        assert_eq!(loaded.assets.template_dir, config.assets.template_dir);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let loaded: AppConfig =
            serde_json::from_str(r#"{"version": 1, "window": {"width": 800, "height": 600}}"#)
                .unwrap();

        assert_eq!(loaded.window.width, 800);
        assert_eq!(
            loaded.assets.lecturer_image_dir,
            PathBuf::from("assets/lecturer-images")
        );
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.window.width = 1024;
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.window.width, 1024);
    }
}
