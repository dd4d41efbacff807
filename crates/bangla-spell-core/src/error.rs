//! Error types for bangla-spell-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why a single dictionary source could not contribute words.
///
/// Source errors are recorded per source and never abort a load.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The word list does not exist at its resolved location.
    #[error("word list not found at {path}")]
    NotFound {
        /// Resolved location of the word list.
        path: Utf8PathBuf,
    },

    /// The word list exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Resolved location of the word list.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The word list is not valid UTF-8.
    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        /// Resolved location of the word list.
        path: Utf8PathBuf,
        /// Underlying decoding error.
        source: std::string::FromUtf8Error,
    },
}

impl SourceError {
    /// Returns `true` when the source was simply absent.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias using [`SourceError`].
pub type SourceResult<T> = Result<T, SourceError>;
