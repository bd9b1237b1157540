//! Error types for uxaudit core.

use std::{error::Error, fmt, io};

/// Error type for uxaudit core operations.
#[derive(Debug)]
pub enum UxAuditError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A manifest, token file or report payload failed to (de)serialize.
    Json(serde_json::Error),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for UxAuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for UxAuditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Other(_) => None,
        }
    }
}

impl From<io::Error> for UxAuditError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for UxAuditError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Convenience result type for uxaudit core.
pub type Result<T> = std::result::Result<T, UxAuditError>;
