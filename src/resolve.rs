//! Output-path resolution
//!
//! Every file-producing command funnels through this module: given the input
//! path, an optional explicit output value, and the target extension, decide
//! where the caller should write. The resolver only computes a path; it
//! never creates files or directories, and it never checks for overwrites.
//!
//! The flow:
//! 1. An explicit output value is trusted verbatim, aside from appending the
//!    expected extension when missing. No prompting.
//! 2. Otherwise the user is asked (default: yes) whether to save next to the
//!    input file, then prompted for a filename or a full path, each with a
//!    derived default.
//!
//! Multi-input commands resolve "next to the input" against their first input.

use std::path::{Path, PathBuf};

use crate::error::DocbenchResult;
use crate::prompt::Prompter;

/// Append `ext` to `name` unless the name already ends with it.
///
/// The comparison is an ASCII case-insensitive suffix match; the name is
/// never reparsed as a path, so `archive.tar.gz` + `.gz` stays untouched and
/// `notes.TXT` + `.txt` stays untouched.
pub fn ensure_extension(name: &str, ext: &str) -> String {
    let name_bytes = name.as_bytes();
    let ext_bytes = ext.as_bytes();
    if name_bytes.len() >= ext_bytes.len()
        && name_bytes[name_bytes.len() - ext_bytes.len()..].eq_ignore_ascii_case(ext_bytes)
    {
        name.to_string()
    } else {
        format!("{name}{ext}")
    }
}

/// Resolve the output path for a command that writes a single file.
///
/// `label` names the artifact in prompts ("text file", "merged PDF", ...).
pub fn resolve_output(
    input: &Path,
    explicit: Option<&str>,
    default_ext: &str,
    label: &str,
    prompter: &dyn Prompter,
) -> DocbenchResult<PathBuf> {
    if let Some(value) = explicit {
        return Ok(PathBuf::from(ensure_extension(value, default_ext)));
    }

    let dir = parent_dir(input);
    let default_name = ensure_extension(&stem_of(input), default_ext);

    let next_to_input =
        prompter.confirm(&format!("Save the {label} next to the input file?"), true)?;

    if next_to_input {
        let name = prompter.input(&format!("Filename for the {label}"), &default_name)?;
        Ok(dir.join(ensure_extension(&name, default_ext)))
    } else {
        let default_full = dir.join(&default_name);
        let typed = prompter.input(
            &format!("Full path for the {label}"),
            &default_full.to_string_lossy(),
        )?;
        Ok(PathBuf::from(ensure_extension(&typed, default_ext)))
    }
}

/// Resolve the output folder for commands that produce many files
/// (`pdf split`, `pdf to-images`).
///
/// Same prompt flow as [`resolve_output`] minus extension handling; the
/// default folder name is the input's stem plus `suffix`.
pub fn resolve_output_dir(
    input: &Path,
    explicit: Option<&str>,
    suffix: &str,
    label: &str,
    prompter: &dyn Prompter,
) -> DocbenchResult<PathBuf> {
    if let Some(value) = explicit {
        return Ok(PathBuf::from(value));
    }

    let dir = parent_dir(input);
    let default_name = format!("{}{}", stem_of(input), suffix);

    let next_to_input = prompter.confirm(
        &format!("Create the {label} folder next to the input file?"),
        true,
    )?;

    if next_to_input {
        let name = prompter.input(&format!("Folder name for the {label}"), &default_name)?;
        Ok(dir.join(name))
    } else {
        let default_full = dir.join(&default_name);
        let typed = prompter.input(
            &format!("Full path for the {label} folder"),
            &default_full.to_string_lossy(),
        )?;
        Ok(PathBuf::from(typed))
    }
}

fn parent_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn stem_of(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}
