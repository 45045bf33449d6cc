//! Persisted configuration
//!
//! Config lives in `~/.promptdeck/config.toml` (or a project-local
//! `.promptdeck/config.toml`, which wins when present). When no key list
//! is persisted, the `PROMPTDECK_API_KEY` environment variable supplies a
//! single fallback credential.

use promptdeck_core::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the single-credential fallback
pub const ENV_API_KEY: &str = "PROMPTDECK_API_KEY";

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Top-level config file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    config: DeckConfig,
}

/// Resolved configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Ordered API key list; rotation order is significant
    #[serde(default)]
    pub api_keys: Vec<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_text_model() -> String {
    DEFAULT_TEXT_MODEL.to_string()
}
fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            api_url: default_api_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
        }
    }
}

/// File-backed config store
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store at an explicit path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default store location: project-local `.promptdeck/config.toml` when
    /// present, otherwise `~/.promptdeck/config.toml`
    pub fn default_store() -> Self {
        let local = PathBuf::from(".promptdeck/config.toml");
        if local.exists() {
            return Self::new(local);
        }
        let path = dirs::home_dir()
            .map(|h| h.join(".promptdeck").join("config.toml"))
            .unwrap_or(local);
        Self::new(path)
    }

    /// Load config. A missing file yields defaults; a corrupt one errors.
    pub fn load(&self) -> Result<DeckConfig> {
        if !self.path.exists() {
            return Ok(DeckConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            DeckError::ConfigError(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(file.config)
    }

    /// Persist the key list, preserving other settings
    pub fn save_keys(&self, keys: Vec<String>) -> Result<()> {
        let mut config = self.load().unwrap_or_default();
        config.api_keys = keys;
        self.save(&config)
    }

    /// Persist the whole config
    pub fn save(&self, config: &DeckConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = ConfigFile {
            config: config.clone(),
        };
        let content = toml::to_string_pretty(&file)
            .map_err(|e| DeckError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Parse a raw key-list editing surface: one key per line, surrounding
/// whitespace trimmed, blank lines discarded.
pub fn parse_key_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("deck_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("config.toml")
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let store = ConfigStore::new("/nonexistent/promptdeck/config.toml");
        let config = store.load().unwrap();
        assert!(config.api_keys.is_empty());
        assert_eq!(config.text_model, "gemini-2.5-flash");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
    }

    #[test]
    fn test_save_keys_roundtrip() {
        let path = temp_config_path();
        let store = ConfigStore::new(&path);

        store
            .save_keys(vec!["key-a".into(), "key-b".into()])
            .unwrap();
        let config = store.load().unwrap();
        assert_eq!(config.api_keys, vec!["key-a", "key-b"]);

        // Saving again must preserve non-key settings
        let mut config = config;
        config.text_model = "gemini-custom".into();
        store.save(&config).unwrap();
        store.save_keys(vec!["key-c".into()]).unwrap();
        let config = store.load().unwrap();
        assert_eq!(config.api_keys, vec!["key-c"]);
        assert_eq!(config.text_model, "gemini-custom");

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_parse_key_list() {
        let raw = "  key-one  \n\nkey-two\n   \nkey-three\n";
        assert_eq!(
            parse_key_list(raw),
            vec!["key-one", "key-two", "key-three"]
        );
        assert!(parse_key_list("\n  \n").is_empty());
    }
}
