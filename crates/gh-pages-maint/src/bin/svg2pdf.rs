//! Convert SVG images to PDF
//!
//! ```text
//! svg2pdf image.svg                  # Convert single SVG file
//! svg2pdf image1.svg image2.svg      # Convert multiple SVG files
//! svg2pdf -d svgs/                   # Convert all SVGs in directory
//! svg2pdf image.svg -o pdfs/         # Convert file and save to specific directory
//! svg2pdf -d svgs/ -o pdfs/          # Convert all SVGs in svgs/ and save to pdfs/
//! ```

use anyhow::Context;
use clap::Parser;
use gh_pages_config::AppConfig;
use gh_pages_maint::logger;
use std::path::PathBuf;
use std::process::ExitCode;
use svg_to_pdf::{convert_directory, convert_svg_to_pdf, ExternalRenderer};

const EXAMPLES: &str = "\
Examples:
  svg2pdf image.svg                  Convert single SVG file
  svg2pdf image1.svg image2.svg      Convert multiple SVG files
  svg2pdf -d svgs/                   Convert all SVGs in directory
  svg2pdf image.svg -o pdfs/         Convert file and save to specific directory
  svg2pdf -d svgs/ -o pdfs/          Convert all SVGs in svgs/ and save to pdfs/";

#[derive(Debug, Parser)]
#[command(name = "svg2pdf", about = "Convert SVG images to PDF", after_help = EXAMPLES)]
struct Cli {
    /// Process input as directory (convert all SVG files in it)
    #[arg(short = 'd', long = "dir", value_name = "DIRECTORY")]
    dir: Option<PathBuf>,

    /// Output directory for PDF files
    #[arg(short = 'o', long = "output", value_name = "DIRECTORY")]
    output: Option<PathBuf>,

    /// Converter executable (rsvg-convert compatible)
    #[arg(long, value_name = "PROGRAM")]
    converter: Option<String>,

    /// SVG files to convert
    #[arg(value_name = "SVG_FILE", required_unless_present = "dir")]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    logger::init();
    let cli = Cli::parse();

    let program = cli
        .converter
        .clone()
        .unwrap_or_else(|| AppConfig::load().svg_converter);
    let renderer = ExternalRenderer::new(program);
    log::info!("Converting with {}", renderer.program());
    let output_dir = cli.output.as_deref();

    if let Some(dir) = &cli.dir {
        if !cli.files.is_empty() {
            log::warn!("Additional arguments ignored in directory mode");
        }
        let converted = convert_directory(&renderer, dir, output_dir)
            .with_context(|| format!("Failed to convert {}", dir.display()))?;
        println!("Successfully converted {converted} SVG files");
        return Ok(ExitCode::SUCCESS);
    }

    let mut successful = 0;
    for file in &cli.files {
        match convert_svg_to_pdf(&renderer, file, output_dir) {
            Ok(_) => successful += 1,
            Err(e) => log::error!("{}", e),
        }
    }
    println!(
        "Successfully converted {} out of {} files",
        successful,
        cli.files.len()
    );

    if successful == cli.files.len() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
