// Standard library
use std::path::{Path, PathBuf};
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use tracing::{error, info};

// Current module imports
use super::constants::DEFAULT_CONFIG;
use super::models::{ConfigManager, Settings};

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading the configuration.
    ///
    /// `override_path` comes from the `--config` flag and wins over the
    /// `CLOUDZONES_CONFIG_PATH` environment variable and the user config dir.
    pub fn new(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path: PathBuf = match override_path {
            Some(path) => path,
            None => Self::get_config_path()?,
        };
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(ConfigManager {
            settings,
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var("CLOUDZONES_CONFIG_PATH") {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("cloudzones").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(Environment::with_prefix("CLOUDZONES").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, FileFormat};

    use super::*;

    #[test]
    fn default_config_template_parses() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.log.level, "info");
        assert!(settings.compute.endpoint.contains("8774"));
        assert!(settings.volume.endpoint.contains("8776"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[compute]\nendpoint = \"http://localhost:8774/v2.1\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.log.level, "info");
        assert!(settings.volume.endpoint.is_empty());
        assert!(settings.compute.token.is_empty());
    }
}
