// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Failed to parse section config: {0}")]
    Parse(String),

    #[error("Invalid pattern for section '{section}': {source}")]
    BadPattern {
        section: String,
        #[source]
        source: regex::Error,
    },

    #[error("Section config contains no sections")]
    NoSections,
}

#[derive(Error, Debug)]
pub enum RichTextError {
    #[error("Style run [{start}, {end}) is empty or inverted")]
    EmptyRun { start: usize, end: usize },

    #[error("Style run [{start}, {end}) exceeds text length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Style run starting at {start} overlaps the previous run ending at {prev_end}")]
    Overlap { start: usize, prev_end: usize },

    #[error("Style run [{start}, {end}) is not aligned to a character boundary")]
    NotCharBoundary { start: usize, end: usize },
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse lookup table: {0}")]
    Parse(String),

    #[error("Invalid styled text in row '{key}': {source}")]
    InvalidRow {
        key: String,
        #[source]
        source: RichTextError,
    },

    #[error("Could not find row for key '{0}'")]
    KeyNotFound(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
