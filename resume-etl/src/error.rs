use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Extraction failed for {}: {cause}", .path.display())]
    Extraction { path: PathBuf, cause: String },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EtlError>;
