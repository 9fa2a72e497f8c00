//! Error types for the wordtally library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`WordTallyError`].
//!
//! # Examples
//!
//! ```
//! use wordtally::error::{Result, WordTallyError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordTallyError::config("top_k must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// The main error type for wordtally operations.
#[derive(Error, Debug)]
pub enum WordTallyError {
    /// I/O errors (reading sources, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source file does not exist
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    /// The source bytes are not valid UTF-8
    #[error("Could not decode '{}' as UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// A percentage was requested for an empty token stream
    #[error("No data: the input contains no words")]
    NoData,

    /// Report persistence errors
    #[error("Report error: {0}")]
    Report(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordTallyError.
pub type Result<T> = std::result::Result<T, WordTallyError>;

impl WordTallyError {
    /// Create a new report error.
    pub fn report<S: Into<String>>(msg: S) -> Self {
        WordTallyError::Report(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordTallyError::Config(msg.into())
    }

    /// Classify an I/O error raised while opening `path` for reading.
    pub fn from_read<P: Into<PathBuf>>(err: io::Error, path: P) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            WordTallyError::FileNotFound(path.into())
        } else {
            WordTallyError::Io(err)
        }
    }
}
