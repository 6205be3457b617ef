use std::path::PathBuf;
use thiserror::Error;

/// The main error type for iconkit operations.
#[derive(Debug, Error)]
pub enum IconkitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in {path}: {message}")]
    XmlParse { path: PathBuf, message: String },

    #[error("Invalid icon catalog {path}: {message}")]
    CatalogInvalid { path: PathBuf, message: String },

    #[error("Invalid label file {path}: {message}")]
    LabelsInvalid { path: PathBuf, message: String },

    #[error("Invalid SVG file {path}: {message}")]
    SvgInvalid { path: PathBuf, message: String },

    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot rename graphics file to {path}: {message}")]
    GraphicsConflict { path: PathBuf, message: String },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Check failed with {error_count} error(s) and {warning_count} warning(s)")]
    CheckFailed {
        error_count: usize,
        warning_count: usize,
    },
}
