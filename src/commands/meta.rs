//! Metadata command handlers

use std::path::Path;

use anyhow::Result;

use docbench::meta::{self, FileReport};
use docbench::{resolve_output, Prompter};

use super::{ensure_parent, require_exists};

pub fn cmd_meta_file(
    path: &Path,
    output: Option<&str>,
    json: bool,
    prompter: &dyn Prompter,
) -> Result<()> {
    require_exists(path)?;

    let report = meta::file_report(path)?;
    write_report(path, std::slice::from_ref(&report), output, json, prompter)
}

pub fn cmd_meta_folder(
    path: &Path,
    recursive: bool,
    output: Option<&str>,
    json: bool,
    prompter: &dyn Prompter,
) -> Result<()> {
    require_exists(path)?;

    let reports = meta::folder_report(path, recursive)?;
    write_report(path, &reports, output, json, prompter)
}

fn write_report(
    input: &Path,
    reports: &[FileReport],
    output: Option<&str>,
    json: bool,
    prompter: &dyn Prompter,
) -> Result<()> {
    let ext = if json { ".json" } else { ".txt" };
    // The derived default is "<stem>_meta" so a text report about a .txt
    // input never defaults onto the input itself. Folder inputs resolve
    // inside the folder.
    let nominal = if input.is_dir() {
        input.join("report")
    } else {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        input.with_file_name(format!("{stem}_meta"))
    };
    let out_path = resolve_output(&nominal, output, ext, "metadata report", prompter)?;
    ensure_parent(&out_path)?;

    let body = if json {
        serde_json::to_string_pretty(reports)?
    } else {
        meta::render_text(reports)
    };
    std::fs::write(&out_path, body)?;

    println!(
        "✓ Wrote metadata for {} entries to {}",
        reports.len(),
        out_path.display()
    );
    Ok(())
}
