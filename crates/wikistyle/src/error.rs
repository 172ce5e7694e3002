//! Error types for theme loading and render output.
//!
//! Resolving colors and computing layouts never fails. Everything here comes
//! from reading theme files or serializing render specs.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::color::Rgb;
use crate::kind::ObjectKind;

/// Errors that can occur when loading a theme or serializing render output.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// YAML or CSS syntax error, or a schema violation.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A color value that could not be parsed.
    #[error("invalid color '{value}' for {context}: {reason}")]
    InvalidColor {
        context: String,
        value: String,
        reason: String,
    },

    /// A length that is not a non-negative pixel value.
    #[error("invalid length '{value}' for {context} (expected pixels)")]
    InvalidLength { context: String, value: String },

    /// Hover color identical to the base color.
    #[error("hover color {color} for '{kind}' is the same as its base color")]
    HoverNotDistinct { kind: ObjectKind, color: Rgb },

    /// Theme file could not be read.
    #[error("failed to read theme {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file extension is neither YAML nor CSS.
    #[error("unsupported theme format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Render spec could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ThemeError {
    /// Attaches a source path to a parse error that has none yet.
    pub(crate) fn with_path(self, source: &Path) -> Self {
        match self {
            ThemeError::Parse { path: None, message } => ThemeError::Parse {
                path: Some(source.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
