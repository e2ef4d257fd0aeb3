//! Error types for forkify-cli

use thiserror::Error;

/// Result type alias for forkify-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in forkify-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from forkify-core or the API client
    #[error("{0}")]
    Core(#[from] forkify_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`AppConfig`](crate::config::AppConfig)
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A shell command could not be understood
    #[error("{message}")]
    Command {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a command error.
    pub fn command<S: Into<String>>(message: S) -> Self {
        Error::Command {
            message: message.into(),
        }
    }
}
