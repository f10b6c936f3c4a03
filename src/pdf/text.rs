//! PDF text extraction.
//!
//! One canonical entry point on top of the `pdf-extract` crate. Predecessor
//! tooling probed a couple of candidate function names at call time; here the
//! signature is fixed and callers link against it directly.

use std::path::Path;

use crate::error::{DocbenchError, DocbenchResult};

/// Extract the text content of a PDF.
///
/// Returns the raw extracted text. An empty result is not an error, since
/// scanned PDFs legitimately contain no text layer; callers decide how to
/// report that.
pub fn extract_text(path: &Path) -> DocbenchResult<String> {
    pdf_extract::extract_text(path).map_err(|err| DocbenchError::Pdf {
        path: path.to_path_buf(),
        message: format!("text extraction failed: {err}"),
    })
}
