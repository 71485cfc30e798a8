//! Error types for chipview.

use std::path::PathBuf;

/// Result type alias for chipview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a chip view.
///
/// Layout and adapter operations are total and never fail; only loading
/// configuration from text or disk produces errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration text could not be parsed.
    #[error("Config parse error: {message}")]
    Parse { message: String },

    /// File I/O error.
    #[error("Config I/O error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value was well-formed but unusable.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
