//! Raw TOML configuration data types
//!
//! These structs mirror the structure of the config file and are
//! deserialized directly.

use githelper_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gemini: FileGeminiConfig,
    pub repl: FileReplConfig,
}

/// Gemini service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier (e.g. "gemini-1.5-flash")
    pub model: String,
    /// API credential. Usually supplied via the environment, not the file.
    pub api_key: Option<String>,
    /// Service endpoint override
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

/// REPL configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to the line-edit history file
    pub history_file: Option<String>,
}

/// Resolved runtime settings, constructed once at startup and passed into
/// the gateway explicitly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub model: Model,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        FileConfig::default().into_settings()
    }
}

impl FileConfig {
    /// Resolve raw file values into runtime settings
    pub fn into_settings(self) -> Settings {
        Settings {
            // FromStr is infallible; unknown names become Model::Custom
            model: self.gemini.model.parse().unwrap(),
            api_key: self.gemini.api_key,
            base_url: self.gemini.base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert!(config.gemini.api_key.is_none());
        assert!(
            config
                .gemini
                .base_url
                .starts_with("https://generativelanguage")
        );
    }

    #[test]
    fn test_into_settings_parses_model() {
        let mut config = FileConfig::default();
        config.gemini.model = "gemini-1.5-pro".to_string();
        let settings = config.into_settings();
        assert_eq!(settings.model, Model::Gemini15Pro);
    }

    #[test]
    fn test_unknown_model_becomes_custom() {
        let mut config = FileConfig::default();
        config.gemini.model = "gemini-experimental".to_string();
        let settings = config.into_settings();
        assert_eq!(
            settings.model,
            Model::Custom("gemini-experimental".to_string())
        );
    }
}
