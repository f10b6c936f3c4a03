use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// docbench - document-processing toolbox
#[derive(Parser, Debug)]
#[command(name = "docbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip interactive prompts (every question gets its default answer)
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a greeting
    Hello,

    /// Math helpers
    #[command(subcommand)]
    Mat(MatCommands),

    /// PDF utilities: split, merge, extract-text, to-images, merge-folder, ocr
    #[command(subcommand)]
    Pdf(PdfCommands),

    /// OCR an image file
    Ocr {
        /// Image to recognise
        image: PathBuf,

        /// Output text file (prompts when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory holding the OCR model files
        #[arg(long)]
        models_dir: Option<PathBuf>,
    },

    /// File and folder metadata reports
    #[command(subcommand)]
    Meta(MetaCommands),

    /// Format conversion
    #[command(subcommand)]
    Convert(ConvertCommands),
}

#[derive(Subcommand, Debug)]
pub enum MatCommands {
    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Addition { a: i64, b: i64 },

    /// Subtract two numbers
    #[command(allow_negative_numbers = true)]
    Subtraction { a: i64, b: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PdfCommands {
    /// Split a PDF into one file per page
    Split {
        /// PDF to split
        input: PathBuf,

        /// Output folder (prompts when omitted)
        output_base: Option<String>,
    },

    /// Merge multiple PDFs into one
    Merge {
        /// PDFs to merge, in order
        pdfs: Vec<PathBuf>,

        /// Merged output file (prompts when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract the text layer of a PDF
    ExtractText {
        /// PDF to read
        input: PathBuf,

        /// Output text file name (prompts when omitted)
        #[arg(short = 'n', long = "output-name")]
        output_name: Option<String>,
    },

    /// Render PDF pages as PNG images
    ToImages {
        /// PDF to render
        input: PathBuf,

        /// Output folder (prompts when omitted)
        output_folder: Option<String>,
    },

    /// Merge every PDF found in a folder
    MergeFolder {
        /// Folder to scan (non-recursive)
        folder: PathBuf,

        /// Merged output file (prompts when omitted)
        output: Option<String>,
    },

    /// OCR a whole PDF page by page
    Ocr {
        /// PDF to recognise
        input: PathBuf,

        /// Output text file (prompts when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory holding the OCR model files
        #[arg(long)]
        models_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MetaCommands {
    /// Metadata report for a single file
    File {
        /// File to inspect
        path: PathBuf,

        /// Output report file (prompts when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Write the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Metadata report for the files in a folder
    Folder {
        /// Folder to inspect
        path: PathBuf,

        /// Include files in subfolders
        #[arg(short, long)]
        recursive: bool,

        /// Output report file (prompts when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Write the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConvertCommands {
    /// PDF to Word document (text layer only)
    PdfToWord {
        input: PathBuf,
        output: Option<String>,
    },

    /// Excel workbook to CSV (first sheet)
    XlsxToCsv {
        input: PathBuf,
        output: Option<String>,
    },

    /// CSV to Excel workbook
    CsvToXlsx {
        input: PathBuf,
        output: Option<String>,
    },

    /// Extract the audio track of an MP4 as MP3
    Mp4ToMp3 {
        input: PathBuf,
        output: Option<String>,
    },

    /// Re-encode an image in another format
    ImageFormat {
        input: PathBuf,
        output: Option<String>,

        /// Target format when no output path is given
        #[arg(long, default_value = "png")]
        to: String,
    },
}
