//! Season Processor Library
//!
//! A Rust library for converting semicolon-delimited soccer season statistics
//! into a weighted-average team summary serialized as JSON.
//!
//! This library provides tools for:
//! - Parsing season statistics files with BOM and line-terminator handling
//! - Computing fixed-weight averages across a three-season window
//! - Aggregating per-season records into a single team summary
//! - Writing the summary as a flat JSON object named after the input file
//! - Typed error handling across every failure path

pub mod constants;
pub mod models;

// Core application modules
pub mod app {
    pub mod services {
        pub mod aggregator;
        pub mod averager;
        pub mod season_parser;
        pub mod summary_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use models::{SeasonRecord, StatsSummary};

/// Result type alias for the season processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for season processing operations
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
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Line does not carry enough fields
    #[error("Format error on line {line}: expected at least {expected} fields, found {found}")]
    InvalidFormat {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Field could not be parsed as a number
    #[error("Parse error on line {line}: invalid value '{value}' for field {field}")]
    NumericField {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Fewer seasons supplied than the averaging window requires
    #[error("Insufficient data: {required} seasons required, found {found}")]
    InsufficientData { required: usize, found: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
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

    /// Create a format error for a line with too few fields
    pub fn invalid_format(line: usize, expected: usize, found: usize) -> Self {
        Self::InvalidFormat {
            line,
            expected,
            found,
        }
    }

    /// Create a parse error for a malformed numeric field
    pub fn numeric_field(
        line: usize,
        field: &'static str,
        value: impl Into<String>,
        source: std::num::ParseFloatError,
    ) -> Self {
        Self::NumericField {
            line,
            field,
            value: value.into(),
            source,
        }
    }

    /// Create an insufficient data error
    pub fn insufficient_data(required: usize, found: usize) -> Self {
        Self::InsufficientData { required, found }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
