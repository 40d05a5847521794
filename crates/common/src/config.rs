//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ToolfieldError, ToolfieldResult};

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory where rendered frame sequences are written.
    pub output_dir: PathBuf,

    /// Live animation defaults.
    pub animation: AnimationDefaults,

    /// Offline render defaults.
    pub render: RenderDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Defaults for the live background animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationDefaults {
    /// Built-in theme name ("tools" or "hardware").
    pub theme: String,

    /// Target frame rate of the animation loop.
    pub fps: u32,

    /// Fixed seed for element placement. `None` draws from the OS.
    pub seed: Option<u64>,
}

/// Defaults for offline frame rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,

    /// Number of frames to render.
    pub frames: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "toolfield=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: dirs_default_output(),
            animation: AnimationDefaults::default(),
            render: RenderDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            theme: "tools".to_string(),
            fps: 60,
            seed: None,
        }
    }
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frames: 120,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> ToolfieldResult<Self> {
        if !path.exists() {
            return Err(ToolfieldError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> ToolfieldResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: &Path) -> ToolfieldResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the animation loop cannot run with.
    pub fn validate(&self) -> ToolfieldResult<()> {
        if self.animation.fps == 0 {
            return Err(ToolfieldError::config("animation.fps must be positive"));
        }
        if self.render.width == 0 || self.render.height == 0 {
            return Err(ToolfieldError::config(
                "render.width and render.height must be positive",
            ));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("toolfield").join("config.json")
}

/// Default output directory.
fn dirs_default_output() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("toolfield").join("renders")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "animation": { "theme": "hardware" } }"#).unwrap();
        assert_eq!(config.animation.theme, "hardware");
        assert_eq!(config.animation.fps, 60);
        assert_eq!(config.render.width, 1280);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ToolfieldError::FileNotFound { .. }));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let mut config = AppConfig::default();
        config.animation.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.animation.seed = Some(7);
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.animation.seed, Some(7));
    }
}
