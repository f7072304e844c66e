//! Error types for docker-compose-air-gapper
//!
//! Domain-specific error types using thiserror. Every variant maps to a
//! 5xx message number so fatal errors are logged with a stable identifier.

use std::path::PathBuf;
use thiserror::Error;

/// Option value errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Integer option with non-integer text
    #[error("Option '{option}' must be a non-negative integer, got '{value}'")]
    InvalidInteger { option: String, value: String },
}

impl ConfigError {
    /// Message number used when logging this error
    pub fn message_index(&self) -> u16 {
        match self {
            Self::InvalidInteger { .. } => 501,
        }
    }
}

/// File access errors
#[derive(Error, Debug)]
pub enum FileError {
    /// Input file missing or unreadable
    #[error("Cannot read file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Standard input unreadable
    #[error("Cannot read standard input: {error}")]
    ReadStdin { error: String },

    /// Output file unwritable
    #[error("Cannot write file '{path}': {error}")]
    Write { path: PathBuf, error: String },

    /// Standard output closed or unwritable
    #[error("Cannot write standard output: {error}")]
    WriteStdout { error: String },
}

impl FileError {
    /// Message number used when logging this error
    pub fn message_index(&self) -> u16 {
        match self {
            Self::Read { .. } => 502,
            Self::ReadStdin { .. } => 503,
            Self::Write { .. } => 504,
            Self::WriteStdout { .. } => 510,
        }
    }
}

/// Compose document errors
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Not valid YAML
    #[error("Failed to parse compose document: {0}")]
    Parse(String),

    /// Valid YAML, but the top level is not a mapping
    #[error("Compose document must be a mapping, found {found}")]
    NotAMapping { found: String },

    /// `services` is present but not a mapping
    #[error("'services' must be a mapping of service names to definitions, found {found}")]
    InvalidServices { found: String },

    /// A service definition is not a mapping
    #[error("Service '{service}' must be a mapping, found {found}")]
    InvalidService { service: String, found: String },

    /// An `image` value that is not a scalar
    #[error("Service '{service}' has an 'image' that is not a string, found {found}")]
    InvalidImage { service: String, found: String },
}

impl DocumentError {
    /// Message number used when logging this error
    pub fn message_index(&self) -> u16 {
        match self {
            Self::Parse(_) => 505,
            Self::NotAMapping { .. } => 506,
            Self::InvalidServices { .. } => 507,
            Self::InvalidService { .. } => 508,
            Self::InvalidImage { .. } => 509,
        }
    }
}

/// Top-level error type
#[derive(Error, Debug)]
pub enum AirGapperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File error
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// Document error
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

impl AirGapperError {
    /// Message number used when logging this error
    pub fn message_index(&self) -> u16 {
        match self {
            Self::Config(e) => e.message_index(),
            Self::File(e) => e.message_index(),
            Self::Document(e) => e.message_index(),
        }
    }
}
