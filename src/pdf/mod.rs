//! PDF manipulation: split, merge, merge-folder, text extraction.
//!
//! Page-level surgery (split/merge) is built on `lopdf`; text extraction is
//! a single canonical entry point on top of `pdf-extract`.

mod pages;
mod text;

pub use text::extract_text;

use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::{DocbenchError, DocbenchResult};
use pages::{clone_page_into, empty_document};

fn pdf_error(path: &Path, err: impl std::fmt::Display) -> DocbenchError {
    DocbenchError::Pdf {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Load a PDF from disk.
pub fn load(path: &Path) -> DocbenchResult<Document> {
    Document::load(path).map_err(|err| pdf_error(path, err))
}

/// Number of pages in a PDF file.
pub fn page_count(path: &Path) -> DocbenchResult<usize> {
    Ok(load(path)?.get_pages().len())
}

/// File name for page `page_num` of a `total`-page document, zero-padded to
/// the page count's width (minimum 3) so a name-sorted merge preserves page
/// order at any document size.
fn page_file_name(page_num: u32, total: usize) -> String {
    let width = total.to_string().len().max(3);
    format!("page_{page_num:0width$}.pdf")
}

/// Split a PDF into one single-page file per page, written into `out_dir`
/// as `page_001.pdf`, `page_002.pdf`, ...
///
/// `out_dir` must already exist.
pub fn split_to_pages(input: &Path, out_dir: &Path) -> DocbenchResult<Vec<PathBuf>> {
    let source = load(input)?;
    let source_pages = source.get_pages();

    let mut written = Vec::with_capacity(source_pages.len());
    for (page_num, page_id) in &source_pages {
        let mut single = empty_document();
        clone_page_into(&source, &mut single, *page_id).map_err(|err| pdf_error(input, err))?;

        let out_path = out_dir.join(page_file_name(*page_num, source_pages.len()));
        single
            .save(&out_path)
            .map_err(|err| pdf_error(&out_path, err))?;
        written.push(out_path);
    }

    Ok(written)
}

/// Merge several PDFs into one, pages in input order. Returns the total page
/// count of the merged document.
///
/// An empty input list is a hard usage error, checked before anything is
/// opened or written.
pub fn merge_files(inputs: &[PathBuf], output: &Path) -> DocbenchResult<usize> {
    if inputs.is_empty() {
        return Err(DocbenchError::NoInputs);
    }

    let mut merged = empty_document();
    let mut total_pages = 0;

    for input in inputs {
        let source = load(input)?;
        let source_pages = source.get_pages();
        let mut page_numbers: Vec<u32> = source_pages.keys().copied().collect();
        page_numbers.sort_unstable();

        for page_num in page_numbers {
            let page_id = source_pages[&page_num];
            clone_page_into(&source, &mut merged, page_id)
                .map_err(|err| pdf_error(input, err))?;
            total_pages += 1;
        }
    }

    merged
        .save(output)
        .map_err(|err| pdf_error(output, err))?;
    Ok(total_pages)
}

/// List the PDF files directly inside `folder` (non-recursive), sorted by
/// file name.
pub fn pdfs_in_folder(folder: &Path) -> DocbenchResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        let is_pdf = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Merge every PDF found directly inside `folder` into `output`. Returns the
/// number of files merged and the total page count.
pub fn merge_folder(folder: &Path, output: &Path) -> DocbenchResult<(usize, usize)> {
    let inputs = pdfs_in_folder(folder)?;
    let pages = merge_files(&inputs, output)?;
    Ok((inputs.len(), pages))
}
