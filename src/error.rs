//! Crate-level error types.

use std::fmt;

/// Errors produced by the diorama crate.
#[derive(Debug)]
pub enum DioramaError {
    /// Malformed or missing motion-profile / camera-preset data.
    Config(String),
    /// A motion profile could not be bound to an object.
    Bind {
        /// Lowercase name of the object that failed to bind.
        object: String,
        /// What was wrong with the parameter set.
        reason: String,
    },
    /// A camera request that the current state cannot satisfy.
    State(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Rendering backend or context failure.
    Backend(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl DioramaError {
    /// Shorthand for a [`DioramaError::Bind`] on `object`.
    pub(crate) fn bind(object: &str, reason: impl Into<String>) -> Self {
        Self::Bind {
            object: object.to_owned(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DioramaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Bind { object, reason } => {
                write!(f, "cannot bind motion profile to '{object}': {reason}")
            }
            Self::State(msg) => write!(f, "camera state error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Backend(msg) => write!(f, "render backend error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for DioramaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DioramaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DioramaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
