// Current module imports
use super::errors::ValidationError;
use super::models::Settings;

impl Settings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(ValidationError::InvalidLogLevel(other.to_string())),
        }
    }
}
