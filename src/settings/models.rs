// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: default_log_level(),
        }
    }
}

/// Endpoint and credentials for one backing service.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EndpointConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,

    #[serde(default)]
    pub compute: EndpointConfig,

    #[serde(default)]
    pub volume: EndpointConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Loads and holds the application settings. A report run never reloads its
/// configuration, so the settings are held by value.
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}
