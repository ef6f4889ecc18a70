//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `GITHELPER_*` (and `GEMINI_API_KEY` for the key)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./githelper.toml` or `./.githelper.toml`
    /// 4. XDG config: `~/.config/githelper/config.toml`
    /// 5. Default values
    ///
    /// A missing or invalid API key is not an error here; it surfaces on
    /// first use through the gateway.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Project-level config files (check both names)
        for filename in &["githelper.toml", ".githelper.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Explicit config path (highest priority among files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Environment, e.g. GITHELPER_GEMINI__MODEL, GITHELPER_GEMINI__API_KEY
        figment = figment.merge(Env::prefixed("GITHELPER_").split("__"));

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;

        // The credential's conventional environment variable
        if config.gemini.api_key.is_none() {
            config.gemini.api_key = std::env::var("GEMINI_API_KEY").ok();
        }

        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    ///
    /// The `GEMINI_API_KEY` environment variable is still honored: skipping
    /// config files never means skipping the credential.
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        config.gemini.api_key = std::env::var("GEMINI_API_KEY").ok();
        config
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("githelper").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["githelper.toml", ".githelper.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     GITHELPER_* / GEMINI_API_KEY");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./githelper.toml or ./.githelper.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
