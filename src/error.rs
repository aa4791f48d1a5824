//! Unified error type for the lambdas crate.

use thiserror::Error;

#[cfg(feature = "cli")]
use crate::cli::{ConfigError, LoggingError};

/// Every error the crate can produce.
///
/// Filtering itself cannot fail; errors come from writing the report and,
/// with the `cli` feature, from loading configuration or installing the
/// log subscriber.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed.
    #[cfg(feature = "cli")]
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Log subscriber could not be installed.
    #[cfg(feature = "cli")]
    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns `true` if this is a configuration error.
    #[cfg(feature = "cli")]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
