//! Error types for the life engine.

use std::io;

use thiserror::Error;

/// Why a board file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The text held no non-empty rows.
    #[error("board has no rows")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 1-based line number in the source text.
        line: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// Errors surfaced by the engine, codec and store.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Board text is malformed. Never repaired.
    #[error("invalid board format: {0}")]
    InvalidFormat(#[from] FormatError),

    /// No stored board with this name in either directory.
    #[error("board '{name}' not found")]
    NotFound {
        /// File name including the extension.
        name: String,
    },

    /// Board name is not a plain file name (path separators, `.` or `..`).
    #[error("invalid board name '{name}'")]
    InvalidName {
        /// Name as given by the caller.
        name: String,
    },

    /// Requested dimensions are below the minimum.
    #[error("invalid board size {height}x{width}: both sides must be at least {min}")]
    InvalidDimension {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
        /// Minimum allowed for either side.
        min: usize,
    },

    /// Manual entry was interrupted by the user (Ctrl+C).
    #[error("input interrupted")]
    Interrupted,

    /// I/O error from file or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = LifeError> = std::result::Result<T, E>;
