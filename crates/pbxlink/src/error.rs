//! Error types for Pbxlink
//!
//! Every failure the patcher can hit is represented here: parse errors
//! from the pbxproj reader, structural problems in the document, and the
//! lookup failures that abort a run before anything is saved.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using Pbxlink's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Pbxlink error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Parse error while reading a pbxproj document (without location info).
    #[error("parse error: {0}")]
    Parse(String),

    /// Parse error with source location information.
    #[error("parse error at line {line}, column {column}: {message}")]
    ParseAt {
        message: String,
        line: usize,
        column: usize,
    },

    /// The document parsed but does not have the shape of an Xcode project
    /// (missing objects table, dangling id, wrong value type).
    #[error("malformed project: {0}")]
    Malformed(String),

    /// The resource file to link is not on disk. Nothing is mutated.
    #[error("resource file not found: {}", .0.display())]
    MissingResource(PathBuf),

    /// The configured group is not a child of the project's main group.
    #[error("group not found: {0}")]
    GroupNotFound(String),

    /// The configured target does not exist in the project.
    #[error("target not found: {0}")]
    TargetNotFound(String),

    /// I/O error from filesystem operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a parse error with source location.
    pub fn parse_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::ParseAt {
            message: message.into(),
            line,
            column,
        }
    }
}
