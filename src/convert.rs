//! One-shot format converters.
//!
//! Each converter takes resolved input/output paths and performs exactly one
//! transformation. No overwrite checks and no retries: a failure is terminal
//! for the invocation and any partial output is left behind.

use std::fs::File;
use std::path::Path;

use calamine::Reader;
use docx_rs::{Docx, Paragraph, Run};

use crate::error::{DocbenchError, DocbenchResult};

fn convert_error(path: &Path, err: impl std::fmt::Display) -> DocbenchError {
    DocbenchError::Convert {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// PDF → DOCX: extract the text layer and write it paragraph-per-line.
///
/// Layout is not preserved; this mirrors what the predecessor converter
/// produced. Returns the number of paragraphs written.
pub fn pdf_to_word(input: &Path, output: &Path) -> DocbenchResult<usize> {
    let text = crate::pdf::extract_text(input)?;

    let mut docx = Docx::new();
    let mut paragraphs = 0;
    for line in text.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        paragraphs += 1;
    }

    let file = File::create(output)?;
    docx.build()
        .pack(file)
        .map_err(|err| convert_error(output, err))?;
    Ok(paragraphs)
}

/// XLSX → CSV: first worksheet only, every cell rendered as text.
/// Returns the number of rows written.
pub fn xlsx_to_csv(input: &Path, output: &Path) -> DocbenchResult<usize> {
    let mut workbook = calamine::open_workbook_auto(input)
        .map_err(|err| convert_error(input, err))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| convert_error(input, "workbook has no sheets"))?;
    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|err| convert_error(input, err))?;

    let mut writer = csv::Writer::from_path(output).map_err(|err| convert_error(output, err))?;
    let mut rows = 0;
    for row in range.rows() {
        let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writer
            .write_record(&record)
            .map_err(|err| convert_error(output, err))?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

/// CSV → XLSX: one worksheet, numeric-looking fields become numbers.
/// Returns the number of rows written.
pub fn csv_to_xlsx(input: &Path, output: &Path) -> DocbenchResult<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input)
        .map_err(|err| convert_error(input, err))?;

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();

    let mut rows = 0;
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|err| convert_error(input, err))?;
        for (col_index, field) in record.iter().enumerate() {
            let row = row_index as u32;
            let col = col_index as u16;
            let write_result = match field.parse::<f64>() {
                Ok(number) => sheet.write_number(row, col, number),
                Err(_) => sheet.write_string(row, col, field),
            };
            write_result.map_err(|err| convert_error(output, err))?;
        }
        rows += 1;
    }

    workbook
        .save(output)
        .map_err(|err| convert_error(output, err))?;
    Ok(rows)
}

/// MP4 → MP3: strip the video stream and re-encode the audio with ffmpeg.
pub fn mp4_to_mp3(input: &Path, output: &Path) -> DocbenchResult<()> {
    let delegate = |message: String| DocbenchError::Delegate {
        tool: "ffmpeg".to_string(),
        message,
    };

    let status = ffmpeg_sidecar::command::FfmpegCommand::new()
        .input(input.to_string_lossy())
        .args(["-vn", "-codec:a", "libmp3lame", "-q:a", "2"])
        .overwrite()
        .output(output.to_string_lossy())
        .spawn()
        .map_err(|err| delegate(format!("failed to start: {err}")))?
        .wait()
        .map_err(|err| delegate(format!("did not finish: {err}")))?;

    if !status.success() {
        return Err(delegate(format!("exited with {status}")));
    }
    Ok(())
}

/// Image format conversion: decode the input, re-encode in the format
/// implied by the output extension.
pub fn image_format(input: &Path, output: &Path) -> DocbenchResult<()> {
    let img = image::open(input)?;
    img.save(output)?;
    Ok(())
}
