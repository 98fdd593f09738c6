use crate::error::{ConfigError, ConfigResult};
use crate::settings::{LoggingSettings, TreeSettings};
use crate::ui::RenderSettings;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the `baltree` driver reads from its TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree behavior settings
    pub tree: TreeSettings,
    /// Rendering settings
    pub render: RenderSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl Config {
    /// Read and validate a TOML file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration out, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Candidate files in lookup order; the first existing one wins
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home) = std::env::var_os("HOME") {
            paths.push(PathBuf::from(&home).join(".baltree").join("config.toml"));
            paths.push(PathBuf::from(&home).join(".config").join("baltree").join("config.toml"));
        }

        paths.push(PathBuf::from("/etc/baltree/config.toml"));

        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(".baltree.toml"));
            paths.push(current_dir.join("baltree.toml"));
        }

        paths
    }

    /// Load from the first existing candidate path, else defaults
    pub fn load() -> ConfigResult<Self> {
        Self::load_with_paths(&Self::config_paths())
    }

    pub fn load_with_paths(paths: &[PathBuf]) -> ConfigResult<Self> {
        for path in paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Write a file holding the defaults
    pub fn create_default_config(path: &Path) -> ConfigResult<()> {
        Self::default().save_to_file(path)
    }

    /// Reject settings that would make tree dumps unreadable
    pub fn validate(&self) -> ConfigResult<()> {
        if self.render.empty_label.is_empty() {
            return Err(ConfigError::Validation(
                "Empty child label must not be empty".to_string(),
            ));
        }
        if self.render.colors && self.render.red == self.render.black {
            return Err(ConfigError::Validation(
                "Red and black node colors must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// Programmatic construction, validated on `build`
pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn tree<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut TreeSettings),
    {
        f(&mut self.config.tree);
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut RenderSettings),
    {
        f(&mut self.config.render);
        self
    }

    pub fn logging<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut LoggingSettings),
    {
        f(&mut self.config.logging);
        self
    }

    pub fn build(self) -> ConfigResult<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
