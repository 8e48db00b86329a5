//! Error types for atomic style generation.

use std::path::PathBuf;

/// Result type alias for atomic style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while translating styles or emitting stylesheets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A shorthand carried a value outside its closed set.
    #[error("Invalid value '{value}' for shorthand '{key}'")]
    InvalidValue { key: String, value: String },

    /// Dynamic input named a shorthand that does not exist.
    #[error("Unknown shorthand '{key}'")]
    UnknownKey { key: String },

    /// Theme configuration could not be parsed.
    #[error("Invalid theme configuration: {message}")]
    Config { message: String },

    /// File I/O error.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a value error.
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an unknown-shorthand error.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
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
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_key_and_value() {
        let err = Error::invalid_value("p", "7");
        let msg = err.to_string();
        assert!(msg.contains("'p'"));
        assert!(msg.contains("'7'"));
    }

    #[test]
    fn io_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io("out/atoms.css", source);
        assert!(err.to_string().contains("out/atoms.css"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
