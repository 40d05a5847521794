//! Error types shared across Toolfield crates.

use std::path::PathBuf;

/// Top-level error type for Toolfield operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolfieldError {
    #[error("Field error: {message}")]
    Field { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid event on line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ToolfieldError.
pub type ToolfieldResult<T> = Result<T, ToolfieldError>;

impl ToolfieldError {
    pub fn field(msg: impl Into<String>) -> Self {
        Self::Field {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_event(line: usize, msg: impl Into<String>) -> Self {
        Self::InvalidEvent {
            line,
            message: msg.into(),
        }
    }
}
