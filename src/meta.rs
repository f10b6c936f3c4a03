//! File and folder metadata reports.
//!
//! Reports are plain data (`serde`-serializable) plus a text renderer; the
//! command layer decides between the text and JSON representations.

use std::path::Path;

use chrono::{DateTime, Local};
use ignore::WalkBuilder;
use serde::Serialize;

use crate::error::{DocbenchError, DocbenchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// Metadata for one filesystem entry.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    pub extension: Option<String>,
    pub size_bytes: u64,
    pub readonly: bool,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub accessed: Option<String>,
}

/// Collect metadata for a single file or directory.
pub fn file_report(path: &Path) -> DocbenchResult<FileReport> {
    let metadata = std::fs::symlink_metadata(path)?;

    let kind = if metadata.file_type().is_symlink() {
        EntryKind::Symlink
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    Ok(FileReport {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        path: path.display().to_string(),
        kind,
        extension: path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase()),
        size_bytes: metadata.len(),
        readonly: metadata.permissions().readonly(),
        created: metadata.created().ok().map(format_time),
        modified: metadata.modified().ok().map(format_time),
        accessed: metadata.accessed().ok().map(format_time),
    })
}

/// Collect metadata for every file under `folder`.
///
/// Non-recursive by default (direct children only); `recursive` walks the
/// whole tree. Hidden files are included.
pub fn folder_report(folder: &Path, recursive: bool) -> DocbenchResult<Vec<FileReport>> {
    if !folder.is_dir() {
        return Err(DocbenchError::InputNotFound {
            path: folder.to_path_buf(),
        });
    }

    let mut walker = WalkBuilder::new(folder);
    walker.standard_filters(false).hidden(false);
    if !recursive {
        walker.max_depth(Some(1));
    }

    let mut reports = Vec::new();
    for entry in walker.build() {
        let entry = entry.map_err(|err| DocbenchError::Delegate {
            tool: "walk".to_string(),
            message: err.to_string(),
        })?;
        let path = entry.path();
        if path == folder {
            continue;
        }
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            reports.push(file_report(path)?);
        }
    }

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(reports)
}

/// Render reports as an aligned text block, one stanza per entry plus a
/// summary line.
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("File: {}\n", report.name));
        out.push_str(&format!("  Path:      {}\n", report.path));
        out.push_str(&format!("  Kind:      {:?}\n", report.kind));
        if let Some(ext) = &report.extension {
            out.push_str(&format!("  Extension: {ext}\n"));
        }
        out.push_str(&format!(
            "  Size:      {} ({} bytes)\n",
            human_size(report.size_bytes),
            report.size_bytes
        ));
        out.push_str(&format!("  Read-only: {}\n", report.readonly));
        for (label, value) in [
            ("Created: ", &report.created),
            ("Modified:", &report.modified),
            ("Accessed:", &report.accessed),
        ] {
            if let Some(ts) = value {
                out.push_str(&format!("  {label} {ts}\n"));
            }
        }
        out.push('\n');
    }

    let total: u64 = reports.iter().map(|r| r.size_bytes).sum();
    out.push_str(&format!(
        "Summary: {} entries, {} total\n",
        reports.len(),
        human_size(total)
    ));
    out
}

fn format_time(time: std::time::SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
