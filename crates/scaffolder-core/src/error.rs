//! Typed errors for choice parsing and project materialization

use std::path::PathBuf;
use thiserror::Error;

/// A command-line choice that does not name any known option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseChoiceError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Failures while writing a resolved matrix to disk
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// A target file already exists and overwriting was not requested
    #[error("refusing to overwrite existing file: {} (use --force to overwrite)", .0.display())]
    Conflict(PathBuf),

    /// The output path, or a directory a file belongs in, exists as something else
    #[error("expected a directory but found a file: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
