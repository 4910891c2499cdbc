use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VapiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("Translation error in {location}: {reason}")]
    TranslationError {
        location: String,
        reason:   String,
    },

    #[error("Could not write {}: {source}", .path.display())]
    OutputWriteError {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VapiError {
    pub fn translation(location: impl Into<String>, reason: impl Into<String>) -> Self {
        VapiError::TranslationError {
            location: location.into(),
            reason:   reason.into(),
        }
    }

    /// Replaces the location of a `TranslationError` with a more precise one.
    /// Other variants pass through untouched.
    pub fn within(self, location: impl Into<String>) -> Self {
        match self {
            VapiError::TranslationError { reason, .. } => VapiError::TranslationError {
                location: location.into(),
                reason,
            },
            other => other,
        }
    }
}
