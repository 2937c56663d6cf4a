//! Error types for loading word lists.
//!
//! Tree operations never fail; only reading a word list can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a word list.
#[derive(Error, Debug)]
pub enum Error {
    /// The word list file does not exist.
    #[error("word list not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Opening or reading the word list failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for word list operations.
pub type Result<T> = std::result::Result<T, Error>;
