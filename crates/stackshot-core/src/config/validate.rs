//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.marker.is_empty() {
            return Err(ConfigError::ValidationError(
                "discovery.marker must not be empty".into(),
            ));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "output.path must not be empty".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.level must be one of error/warn/info/debug/trace, got {other:?}"
                )));
            }
        }
        Ok(())
    }
}
