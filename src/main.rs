//! docbench CLI - document-processing toolbox
//!
//! Usage: docbench <COMMAND>
//!
//! Command groups:
//!   mat      Math helpers (addition, subtraction)
//!   pdf      Split, merge, extract-text, to-images, merge-folder, ocr
//!   ocr      OCR a single image
//!   meta     File and folder metadata reports
//!   convert  Format conversion (pdf-to-word, xlsx-to-csv, ...)

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use docbench::{ConsolePrompter, Prompter, ScriptedPrompter};

use cli::{Cli, Commands, ConvertCommands, MatCommands, MetaCommands, PdfCommands};

fn main() {
    let cli = Cli::parse();

    // --yes answers every prompt with its default, which is exactly what an
    // exhausted scripted prompter does.
    let prompter: Box<dyn Prompter> = if cli.yes {
        Box::new(ScriptedPrompter::empty())
    } else {
        Box::new(ConsolePrompter)
    };

    if let Err(err) = run(cli.command, prompter.as_ref()) {
        eprintln!("✗ error: {err:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands, prompter: &dyn Prompter) -> Result<()> {
    match command {
        Commands::Hello => {
            println!("Hello from docbench!");
            Ok(())
        }

        Commands::Mat(mat) => match mat {
            MatCommands::Addition { a, b } => commands::mat::cmd_addition(a, b),
            MatCommands::Subtraction { a, b } => commands::mat::cmd_subtraction(a, b),
        },

        Commands::Pdf(pdf) => match pdf {
            PdfCommands::Split { input, output_base } => {
                commands::pdf::cmd_split(&input, output_base.as_deref(), prompter)
            }
            PdfCommands::Merge { pdfs, output } => {
                commands::pdf::cmd_merge(&pdfs, output.as_deref(), prompter)
            }
            PdfCommands::ExtractText { input, output_name } => {
                commands::pdf::cmd_extract_text(&input, output_name.as_deref(), prompter)
            }
            PdfCommands::ToImages {
                input,
                output_folder,
            } => commands::pdf::cmd_to_images(&input, output_folder.as_deref(), prompter),
            PdfCommands::MergeFolder { folder, output } => {
                commands::pdf::cmd_merge_folder(&folder, output.as_deref(), prompter)
            }
            PdfCommands::Ocr {
                input,
                output,
                models_dir,
            } => commands::ocr::cmd_ocr_pdf(
                &input,
                output.as_deref(),
                models_dir.as_deref(),
                prompter,
            ),
        },

        Commands::Ocr {
            image,
            output,
            models_dir,
        } => commands::ocr::cmd_ocr_image(
            &image,
            output.as_deref(),
            models_dir.as_deref(),
            prompter,
        ),

        Commands::Meta(meta) => match meta {
            MetaCommands::File { path, output, json } => {
                commands::meta::cmd_meta_file(&path, output.as_deref(), json, prompter)
            }
            MetaCommands::Folder {
                path,
                recursive,
                output,
                json,
            } => commands::meta::cmd_meta_folder(
                &path,
                recursive,
                output.as_deref(),
                json,
                prompter,
            ),
        },

        Commands::Convert(convert) => match convert {
            ConvertCommands::PdfToWord { input, output } => {
                commands::convert::cmd_pdf_to_word(&input, output.as_deref(), prompter)
            }
            ConvertCommands::XlsxToCsv { input, output } => {
                commands::convert::cmd_xlsx_to_csv(&input, output.as_deref(), prompter)
            }
            ConvertCommands::CsvToXlsx { input, output } => {
                commands::convert::cmd_csv_to_xlsx(&input, output.as_deref(), prompter)
            }
            ConvertCommands::Mp4ToMp3 { input, output } => {
                commands::convert::cmd_mp4_to_mp3(&input, output.as_deref(), prompter)
            }
            ConvertCommands::ImageFormat { input, output, to } => {
                commands::convert::cmd_image_format(&input, output.as_deref(), &to, prompter)
            }
        },
    }
}
