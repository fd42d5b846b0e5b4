//! Unified error types for the fixture generator.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fixture generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The output directory could not be created
    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Shape, text box or table placed with an impossible bounding box
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Table cell addressed outside the table grid
    #[error("Cell ({row}, {col}) out of range for a {rows}x{cols} table")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Package part not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for fixture generation.
pub type Result<T> = std::result::Result<T, Error>;
