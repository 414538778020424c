//! Mesh Classifier Library
//!
//! A Rust library for classifying community mesh network nodes from the
//! public node export (a delimited CSV file).
//!
//! This library provides tools for:
//! - Reading the node export with a standard CSV reader (quoting honoured)
//! - Filtering rows to installed nodes only
//! - Resolving named columns against each row, including from-end offsets
//! - Classifying nodes into hubs, supernodes, and plain nodes
//! - Rendering the classified collection as human text, JSON, CSV, or GeoJSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod node_classifier;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{NodeCategory, NodeRecord};
pub use config::Config;

/// Result type alias for the mesh classifier
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for node classification operations
///
/// Every error here is fatal: it propagates to `main`, is printed to stderr,
/// and the process exits nonzero. There is no retry or skip-and-continue.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A row is too short for one of the schema's columns
    #[error(
        "row {row_number}: field '{field}' requires at least {needed} columns, row has {actual}"
    )]
    ShortRow {
        row_number: usize,
        field: &'static str,
        needed: usize,
        actual: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a short row error
    pub fn short_row(row_number: usize, field: &'static str, needed: usize, actual: usize) -> Self {
        Self::ShortRow {
            row_number,
            field,
            needed,
            actual,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
