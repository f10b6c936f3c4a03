//! OCR command handlers
//!
//! Covers both `docbench ocr <image>` and `docbench pdf ocr <pdf>`. The
//! backend is constructed up front so a missing model set fails before any
//! prompting or rendering.

use std::path::Path;

use anyhow::Result;

use docbench::ocr::{self, OcrConfig, OcrsBackend};
use docbench::{resolve_output, Prompter};

use super::{ensure_parent, require_exists};

pub fn cmd_ocr_image(
    image: &Path,
    output: Option<&str>,
    models_dir: Option<&Path>,
    prompter: &dyn Prompter,
) -> Result<()> {
    require_exists(image)?;
    let backend = OcrsBackend::new(OcrConfig::resolve(models_dir))?;

    let out_path = resolve_output(image, output, ".txt", "text file", prompter)?;
    ensure_parent(&out_path)?;

    let text = ocr::image_file_to_text(&backend, image)?;
    std::fs::write(&out_path, &text)?;
    report(&text, &out_path);
    Ok(())
}

pub fn cmd_ocr_pdf(
    input: &Path,
    output: Option<&str>,
    models_dir: Option<&Path>,
    prompter: &dyn Prompter,
) -> Result<()> {
    require_exists(input)?;
    let backend = OcrsBackend::new(OcrConfig::resolve(models_dir))?;

    let out_path = resolve_output(input, output, ".txt", "text file", prompter)?;
    ensure_parent(&out_path)?;

    let text = ocr::pdf_to_text(&backend, input)?;
    std::fs::write(&out_path, &text)?;
    report(&text, &out_path);
    Ok(())
}

fn report(text: &str, out_path: &Path) {
    if text.trim().is_empty() {
        println!(
            "⚠ No text recognised; wrote empty file {}",
            out_path.display()
        );
    } else {
        println!("✓ Recognised text written to {}", out_path.display());
    }
}
