//! Error types for docbench
//!
//! Library code returns `DocbenchError` via `thiserror`; the binary surfaces
//! everything through `anyhow` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docbench operations
pub type DocbenchResult<T> = Result<T, DocbenchError>;

/// Main error type for docbench operations
#[derive(Error, Debug)]
pub enum DocbenchError {
    /// A declared-existing input path is missing. Reported before any
    /// delegate runs.
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// A multi-input command was given zero inputs.
    #[error("no input files given")]
    NoInputs,

    /// PDF parsing or manipulation failed
    #[error("PDF error in {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    /// Page rendering (rasterization) failed
    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },

    /// OCR backend cannot be constructed (missing models, bad config)
    #[error("OCR is not available: {0}")]
    OcrUnavailable(String),

    /// OCR recognition failed
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// Format conversion failed
    #[error("conversion failed for {path}: {message}")]
    Convert { path: PathBuf, message: String },

    /// An external tool invocation failed
    #[error("external tool '{tool}' failed: {message}")]
    Delegate { tool: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode/encode error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Interactive prompt failed (closed stdin, terminal error)
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
