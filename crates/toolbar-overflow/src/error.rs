//! Error types for the toolbar overflow crate.
//!
//! The fitting path never fails: precondition faults are reported as
//! [`Diagnostic`](crate::validate::Diagnostic)s. Errors here come from loading
//! configuration and option sets.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading, parsing, or serializing a [`FitterConfig`](crate::FitterConfig)
/// or an [`OptionSet`](crate::OptionSet).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
