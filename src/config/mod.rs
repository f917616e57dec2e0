//! Application settings.
//!
//! Settings are layered: built-in defaults, then the optional TOML file from
//! [`paths::get_config_path`], then environment variables. A broken settings
//! file never stops the app; it is logged and the remaining layers apply.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod paths;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_VISION_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_INSIGHT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_AUTH_DELAY_MS: u64 = 1200;

/// Environment variables checked for the API key, in order.
const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];
const BASE_URL_VAR: &str = "ECOCAMPUS_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub chat: String,
    pub vision: String,
    pub insight: String,
    pub image: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            chat: DEFAULT_CHAT_MODEL.to_string(),
            vision: DEFAULT_VISION_MODEL.to_string(),
            insight: DEFAULT_INSIGHT_MODEL.to_string(),
            image: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub models: ModelConfig,
    pub auth_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: ModelConfig::default(),
            auth_delay_ms: DEFAULT_AUTH_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Loads every layer. Never fails; problems are logged.
    pub fn load() -> Self {
        let mut config = match paths::get_config_path() {
            Ok(path) => match Self::from_file(&path) {
                Ok(Some(config)) => {
                    info!("Loaded settings from {}", path.display());
                    config
                }
                Ok(None) => {
                    debug!("No settings file at {}, using defaults", path.display());
                    Self::default()
                }
                Err(e) => {
                    warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not resolve config directory: {}", e);
                Self::default()
            }
        };

        config.apply_env(|name| std::env::var(name).ok());
        if config.api_key.is_none() {
            warn!("No Gemini API key configured; assistant features will use fallback text");
        }
        config
    }

    /// Reads a settings file. `Ok(None)` when the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        toml::from_str(&raw)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })
    }

    /// Applies environment overrides through `lookup`, so tests need not touch
    /// the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(url) = lookup(BASE_URL_VAR).filter(|value| !value.trim().is_empty()) {
            self.base_url = url.trim().trim_end_matches('/').to_string();
        }
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.models.chat, "gemini-3-flash-preview");
        assert_eq!(config.models.insight, "gemini-3-pro-preview");
        assert_eq!(config.models.image, "gemini-2.5-flash-image");
        assert_eq!(config.auth_delay(), Duration::from_millis(1200));
    }

    #[test]
    fn test_from_file_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_from_file_partial_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "auth_delay_ms = 50\n\n[models]\nchat = \"gemini-2.5-flash\"\n"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap().unwrap();
        assert_eq!(config.auth_delay_ms, 50);
        assert_eq!(config.models.chat, "gemini-2.5-flash");
        assert_eq!(config.models.vision, DEFAULT_VISION_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "auth_delay_ms = \"soon\"").unwrap();

        let result = AppConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_key_precedence() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("GEMINI_API_KEY", "primary"), ("API_KEY", "secondary")]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));

        let mut config = AppConfig::default();
        config.apply_env(env(&[("GEMINI_API_KEY", "  "), ("API_KEY", "secondary")]));
        assert_eq!(config.api_key.as_deref(), Some("secondary"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AppConfig {
            api_key: Some("from-file".to_string()),
            ..AppConfig::default()
        };
        config.apply_env(env(&[
            ("API_KEY", "from-env"),
            ("ECOCAMPUS_BASE_URL", "http://localhost:8080/models/"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.base_url, "http://localhost:8080/models");
    }

    #[test]
    fn test_env_absent_keeps_values() {
        let mut config = AppConfig {
            api_key: Some("from-file".to_string()),
            ..AppConfig::default()
        };
        config.apply_env(env(&[]));
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
    }
}
