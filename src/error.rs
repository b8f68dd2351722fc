//! Error types for the porter-stem library.
//!
//! The stemming core itself is total and never fails. Errors only arise at the
//! edges: strict input validation, configuration loading, vocabulary files and
//! the command-line driver. All of them are represented by [`StemError`].
//!
//! # Examples
//!
//! ```
//! use porter_stem::error::{StemError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemError::invalid_input("Caresses"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for porter-stem operations.
#[derive(Error, Debug)]
pub enum StemError {
    /// I/O errors (reading word lists, vocabulary files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word outside the lowercase ASCII contract, rejected in strict mode
    #[error("Invalid input: {0:?} is not a lowercase ASCII word")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vocabulary and expected-output files do not line up
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors carrying anyhow context, e.g. which file failed to open
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StemError.
pub type Result<T> = std::result::Result<T, StemError>;

impl StemError {
    /// Create a new invalid input error for the given word.
    pub fn invalid_input<S: Into<String>>(word: S) -> Self {
        StemError::InvalidInput(word.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemError::Config(msg.into())
    }

    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        StemError::Vocabulary(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemError::Other(msg.into())
    }
}
