//! Settings loader
//!
//! Handles loading settings from TOML files, environment variables, and
//! default values through figment.

use crate::config::IocSettings;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ioc_domain::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Settings loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Settings file path
    config_path: Option<PathBuf>,

    /// Environment prefix, including the trailing separator
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the settings file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load settings from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `IocSettings::default()`
    /// 2. TOML settings file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `IOC__LOGGING__LEVEL`)
    pub fn load(&self) -> Result<IocSettings> {
        let mut figment = Figment::new().merge(Serialized::defaults(IocSettings::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so field names keep their underscores
        figment = figment.merge(Env::prefixed(&self.env_prefix).split(CONFIG_ENV_SEPARATOR));

        let settings: IocSettings = figment
            .extract()
            .config_context("Failed to extract settings")?;

        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Save settings to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, settings: &IocSettings, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(settings).config_context("Failed to serialize settings")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write settings file")?;

        Ok(())
    }

    /// Get the current settings file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default settings location
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_settings(settings: &IocSettings) -> Result<()> {
    parse_log_level(&settings.logging.level)?;
    Ok(())
}
