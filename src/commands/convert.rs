//! Conversion command handlers

use std::path::Path;

use anyhow::Result;

use docbench::{convert, resolve_output, Prompter};

use super::{ensure_parent, require_exists};

pub fn cmd_pdf_to_word(input: &Path, output: Option<&str>, prompter: &dyn Prompter) -> Result<()> {
    require_exists(input)?;
    let out_path = resolve_output(input, output, ".docx", "Word document", prompter)?;
    ensure_parent(&out_path)?;

    let paragraphs = convert::pdf_to_word(input, &out_path)?;
    if paragraphs == 0 {
        println!(
            "⚠ No text layer found; wrote empty document {}",
            out_path.display()
        );
    } else {
        println!(
            "✓ Wrote {paragraphs} paragraphs to {}",
            out_path.display()
        );
    }
    Ok(())
}

pub fn cmd_xlsx_to_csv(input: &Path, output: Option<&str>, prompter: &dyn Prompter) -> Result<()> {
    require_exists(input)?;
    let out_path = resolve_output(input, output, ".csv", "CSV file", prompter)?;
    ensure_parent(&out_path)?;

    let rows = convert::xlsx_to_csv(input, &out_path)?;
    println!("✓ Wrote {rows} rows to {}", out_path.display());
    Ok(())
}

pub fn cmd_csv_to_xlsx(input: &Path, output: Option<&str>, prompter: &dyn Prompter) -> Result<()> {
    require_exists(input)?;
    let out_path = resolve_output(input, output, ".xlsx", "Excel workbook", prompter)?;
    ensure_parent(&out_path)?;

    let rows = convert::csv_to_xlsx(input, &out_path)?;
    println!("✓ Wrote {rows} rows to {}", out_path.display());
    Ok(())
}

pub fn cmd_mp4_to_mp3(input: &Path, output: Option<&str>, prompter: &dyn Prompter) -> Result<()> {
    require_exists(input)?;
    let out_path = resolve_output(input, output, ".mp3", "audio file", prompter)?;
    ensure_parent(&out_path)?;

    convert::mp4_to_mp3(input, &out_path)?;
    println!("✓ Extracted audio to {}", out_path.display());
    Ok(())
}

pub fn cmd_image_format(
    input: &Path,
    output: Option<&str>,
    to: &str,
    prompter: &dyn Prompter,
) -> Result<()> {
    require_exists(input)?;

    let ext = format!(".{}", to.trim_start_matches('.').to_ascii_lowercase());
    let out_path = resolve_output(input, output, &ext, "converted image", prompter)?;
    ensure_parent(&out_path)?;

    convert::image_format(input, &out_path)?;
    println!("✓ Converted image to {}", out_path.display());
    Ok(())
}
