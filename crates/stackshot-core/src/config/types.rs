//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How file names are matched against the image marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-sensitive substring match anywhere in the file name.
    /// Permissive: `shot.png.bak` qualifies for marker ".png".
    Substring,
    /// Exact extension match, ASCII case-insensitive.
    Extension,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Marker matched against file names (substring mode) or the
    /// extension to require (extension mode, leading dot optional)
    pub marker: String,

    /// Matching mode
    pub mode: MatchMode,

    /// Recurse into subdirectories
    pub recursive: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            marker: ".png".to_string(),
            mode: MatchMode::Substring,
            recursive: false,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the averaged image is written. Relative paths resolve
    /// against the working directory; an existing file is overwritten.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("result.png"),
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_image_dimension: 10000,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_mode_serde_names() {
        assert_eq!(
            toml::to_string(&DiscoveryConfig::default()).unwrap(),
            "marker = \".png\"\nmode = \"substring\"\nrecursive = false\n"
        );
    }

    #[test]
    fn test_match_mode_roundtrip() {
        let config: DiscoveryConfig = toml::from_str("mode = \"extension\"").unwrap();
        assert_eq!(config.mode, MatchMode::Extension);
        assert_eq!(config.marker, ".png");
    }
}
