//! PDF command handlers

use std::path::Path;

use anyhow::Result;

use docbench::{pdf, raster, resolve_output, resolve_output_dir, Prompter};

use super::{ensure_parent, require_exists};

pub fn cmd_split(input: &Path, output_base: Option<&str>, prompter: &dyn Prompter) -> Result<()> {
    require_exists(input)?;

    let out_dir = resolve_output_dir(input, output_base, "_pages", "split output", prompter)?;
    std::fs::create_dir_all(&out_dir)?;

    let written = pdf::split_to_pages(input, &out_dir)?;
    println!("✓ Split into {} pages in {}", written.len(), out_dir.display());
    Ok(())
}

pub fn cmd_merge(
    inputs: &[std::path::PathBuf],
    output: Option<&str>,
    prompter: &dyn Prompter,
) -> Result<()> {
    let first = inputs.first().ok_or(docbench::DocbenchError::NoInputs)?;
    for input in inputs {
        require_exists(input)?;
    }

    // Resolution treats "<first stem>_merged" as the nominal input so the
    // derived default lands next to the first file.
    let stem = first
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "merged".to_string());
    let nominal = first.with_file_name(format!("{stem}_merged"));
    let out_path = resolve_output(&nominal, output, ".pdf", "merged PDF", prompter)?;
    ensure_parent(&out_path)?;

    let pages = pdf::merge_files(inputs, &out_path)?;
    println!(
        "✓ Merged {} files ({pages} pages) into {}",
        inputs.len(),
        out_path.display()
    );
    Ok(())
}

pub fn cmd_merge_folder(folder: &Path, output: Option<&str>, prompter: &dyn Prompter) -> Result<()> {
    require_exists(folder)?;

    // Scan before resolving so a folder with no PDFs is reported without an
    // interactive session.
    if pdf::pdfs_in_folder(folder)?.is_empty() {
        return Err(docbench::DocbenchError::NoInputs.into());
    }

    let nominal = folder.join("merged");
    let out_path = resolve_output(&nominal, output, ".pdf", "merged PDF", prompter)?;
    ensure_parent(&out_path)?;

    let (files, pages) = pdf::merge_folder(folder, &out_path)?;
    println!(
        "✓ Merged {files} files ({pages} pages) into {}",
        out_path.display()
    );
    Ok(())
}

pub fn cmd_extract_text(
    input: &Path,
    output_name: Option<&str>,
    prompter: &dyn Prompter,
) -> Result<()> {
    require_exists(input)?;

    let out_path = resolve_output(input, output_name, ".txt", "text file", prompter)?;
    ensure_parent(&out_path)?;

    let text = pdf::extract_text(input)?;
    std::fs::write(&out_path, &text)?;

    if text.trim().is_empty() {
        println!(
            "⚠ No text layer found; wrote empty file {}",
            out_path.display()
        );
    } else {
        println!("✓ Extracted text to {}", out_path.display());
    }
    Ok(())
}

pub fn cmd_to_images(
    input: &Path,
    output_folder: Option<&str>,
    prompter: &dyn Prompter,
) -> Result<()> {
    require_exists(input)?;

    let out_dir = resolve_output_dir(input, output_folder, "_images", "image output", prompter)?;
    std::fs::create_dir_all(&out_dir)?;

    let written = raster::pdf_to_images(input, &out_dir)?;
    println!(
        "✓ Rendered {} pages into {}",
        written.len(),
        out_dir.display()
    );
    Ok(())
}
