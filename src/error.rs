//! Shell errors

use std::path::PathBuf;

/// Errors raised while loading or validating the shell configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`crate::ShellConfig`]
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// No screens were configured
    #[error("Config declares no screens")]
    NoScreens,

    /// Two screens share a name
    #[error("Duplicate screen name: {0}")]
    DuplicateScreen(String),

    /// The initial route does not name a configured screen
    #[error("Unknown initial route: {0}")]
    UnknownInitialRoute(String),
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ConfigError>;
