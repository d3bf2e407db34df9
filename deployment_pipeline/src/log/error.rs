//!
//! Append-only log error.
//!

use std::path::PathBuf;

///
/// Append-only log error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the log file.
    #[error("Reading log file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the log file.
        path: PathBuf,
    },
    /// Error parsing the log file.
    #[error("Parsing log file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the log file.
        path: PathBuf,
    },
    /// The log file exists but is empty.
    #[error("Log file {path:?} is empty")]
    EmptyFile {
        /// The path to the log file.
        path: PathBuf,
    },
    /// Error serializing the log entries.
    #[error("Serializing log file {path:?}: {error}")]
    Serializing {
        /// The underlying JSON serialization error.
        error: serde_json::Error,
        /// The path to the log file.
        path: PathBuf,
    },
    /// Error writing the log file.
    #[error("Writing log file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the log file.
        path: PathBuf,
    },
}
