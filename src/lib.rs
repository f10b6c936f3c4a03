//! docbench - document-processing toolbox
//!
//! A grab-bag of document utilities behind one CLI: PDF split/merge/
//! extract-text/rasterize/OCR, image OCR, format conversion, and metadata
//! reports. Every file-producing command resolves its output path through
//! the interactive resolver in [`resolve`], then hands off to exactly one
//! delegate module.

pub mod convert;
pub mod error;
pub mod mat;
pub mod meta;
pub mod ocr;
pub mod pdf;
pub mod prompt;
pub mod raster;
pub mod resolve;

// Re-exports for convenience
pub use error::{DocbenchError, DocbenchResult};
pub use prompt::{ConsolePrompter, Prompter, ScriptedPrompter};
pub use resolve::{ensure_extension, resolve_output, resolve_output_dir};
