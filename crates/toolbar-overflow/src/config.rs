//! Fitter configuration.
//!
//! # Example
//!
//! ```
//! use toolbar_overflow::FitterConfig;
//!
//! let config = FitterConfig::from_toml_str("max_visible = 4").unwrap();
//! assert_eq!(config.max_visible, 4);
//! assert_eq!(config.min_gap, FitterConfig::DEFAULT_MIN_GAP);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use toolbar_overflow_core::logging::targets;

use crate::error::{ConfigError, ConfigResult};

/// Limits applied by the fit computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitterConfig {
    /// Maximum number of items shown directly in the toolbar.
    ///
    /// Expected to be positive. Zero or negative values are accepted but
    /// flagged by validation and cap the visible subset at zero.
    pub max_visible: i32,
    /// Pixel margin reserved at the trailing edge of the toolbar.
    pub min_gap: f32,
}

impl FitterConfig {
    /// Default for [`max_visible`](Self::max_visible).
    pub const DEFAULT_MAX_VISIBLE: i32 = 8;
    /// Default for [`min_gap`](Self::min_gap).
    pub const DEFAULT_MIN_GAP: f32 = 10.0;

    /// Create a config with explicit limits.
    pub fn new(max_visible: i32, min_gap: f32) -> Self {
        Self {
            max_visible,
            min_gap,
        }
    }

    /// Set the visible-count limit using builder pattern.
    pub fn with_max_visible(mut self, max_visible: i32) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Set the trailing margin using builder pattern.
    pub fn with_min_gap(mut self, min_gap: f32) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// The visible-count limit clamped to a usable count.
    pub fn visible_limit(&self) -> usize {
        usize::try_from(self.max_visible).unwrap_or(0)
    }

    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            max_visible = config.max_visible,
            min_gap = config.min_gap,
            "loaded fitter config"
        );
        Ok(config)
    }

    /// Serialize the config to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for FitterConfig {
    fn default() -> Self {
        Self {
            max_visible: Self::DEFAULT_MAX_VISIBLE,
            min_gap: Self::DEFAULT_MIN_GAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = FitterConfig::default();
        assert_eq!(config.max_visible, 8);
        assert_eq!(config.min_gap, 10.0);
        assert_eq!(config.visible_limit(), 8);
    }

    #[test]
    fn test_config_builders() {
        let config = FitterConfig::default().with_max_visible(3).with_min_gap(4.0);
        assert_eq!(config, FitterConfig::new(3, 4.0));
    }

    #[test]
    fn test_visible_limit_non_positive() {
        assert_eq!(FitterConfig::new(0, 10.0).visible_limit(), 0);
        assert_eq!(FitterConfig::new(-5, 10.0).visible_limit(), 0);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = FitterConfig::new(5, 12.5);
        let text = config.to_toml_string().unwrap();
        assert_eq!(FitterConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_config_parse_error() {
        let err = FitterConfig::from_toml_str("max_visible = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_visible = 2\nmin_gap = 6.0").unwrap();

        let config = FitterConfig::load(file.path()).unwrap();
        assert_eq!(config, FitterConfig::new(2, 6.0));
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = FitterConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("here.toml"));
    }
}
