//! PDF page rasterization via pdfium.
//!
//! pdfium is loaded as a shared library at runtime: first from the directory
//! of the running binary, then from the system library path. A missing
//! library is a delegate failure with a pointed message, not a crash.

use std::path::{Path, PathBuf};

use pdfium_render::prelude::*;

use crate::error::{DocbenchError, DocbenchResult};

/// Target pixel width for rendered pages (roughly 200 dpi for A4/letter).
const RENDER_WIDTH: i32 = 1654;

fn render_error(path: &Path, err: impl std::fmt::Display) -> DocbenchError {
    DocbenchError::Render {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn bind_pdfium(input: &Path) -> DocbenchResult<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|err| {
            render_error(
                input,
                format!("pdfium library not available ({err}); install pdfium to rasterize PDFs"),
            )
        })?;
    Ok(Pdfium::new(bindings))
}

/// Render every page of `input` as a PNG file in `out_dir`
/// (`page_001.png`, `page_002.png`, ...). `out_dir` must already exist.
pub fn pdf_to_images(input: &Path, out_dir: &Path) -> DocbenchResult<Vec<PathBuf>> {
    let pdfium = bind_pdfium(input)?;
    let document = pdfium
        .load_pdf_from_file(input, None)
        .map_err(|err| render_error(input, err))?;

    let config = PdfRenderConfig::new().set_target_width(RENDER_WIDTH);

    let mut written = Vec::new();
    for (index, page) in document.pages().iter().enumerate() {
        let bitmap = page
            .render_with_config(&config)
            .map_err(|err| render_error(input, format!("page {}: {err}", index + 1)))?;

        let out_path = out_dir.join(format!("page_{:03}.png", index + 1));
        bitmap.as_image().into_rgb8().save(&out_path)?;
        written.push(out_path);
    }

    Ok(written)
}

/// Render every page of `input` into memory for OCR.
pub fn pdf_to_page_images(input: &Path) -> DocbenchResult<Vec<image::DynamicImage>> {
    let pdfium = bind_pdfium(input)?;
    let document = pdfium
        .load_pdf_from_file(input, None)
        .map_err(|err| render_error(input, err))?;

    let config = PdfRenderConfig::new().set_target_width(RENDER_WIDTH);

    let mut pages = Vec::new();
    for (index, page) in document.pages().iter().enumerate() {
        let bitmap = page
            .render_with_config(&config)
            .map_err(|err| render_error(input, format!("page {}: {err}", index + 1)))?;
        pages.push(bitmap.as_image());
    }

    Ok(pages)
}
