//! Command handlers
//!
//! One `cmd_*` function per CLI operation. Every handler follows the same
//! shape: validate inputs, resolve the output path through the prompter,
//! create parent directories, call exactly one delegate, print one status
//! line. Handlers report errors upward; `main` formats them.

use std::path::Path;

use docbench::{DocbenchError, DocbenchResult};

pub mod convert;
pub mod mat;
pub mod meta;
pub mod ocr;
pub mod pdf;

/// Fail fast when a declared input path does not exist.
///
/// Runs before any prompt or delegate so a typo never costs the user an
/// interactive session.
pub fn require_exists(path: &Path) -> DocbenchResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(DocbenchError::InputNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Create the parent directory of an output file if it is missing.
pub fn ensure_parent(path: &Path) -> DocbenchResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
