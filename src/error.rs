//! Error types for hangul-augment.
//!
//! The syllable codec and the error injector are total and never fail, so
//! everything here comes from the edges: reading and writing datasets,
//! loading configuration, and the command line.
//!
//! # Examples
//!
//! ```
//! use hangul_augment::error::{AugmentError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AugmentError::dataset("missing `output` column"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for hangul-augment operations.
#[derive(Error, Debug)]
pub enum AugmentError {
    /// I/O errors (opening, reading or writing dataset files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing or serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset shape errors (missing columns, unusable rows)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with AugmentError.
pub type Result<T> = std::result::Result<T, AugmentError>;

impl AugmentError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        AugmentError::Dataset(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AugmentError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AugmentError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
