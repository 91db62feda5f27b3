//! Detect command - document family sniff for a single PDF.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use padv_core::{detect_family, PdfTextExtractor};

use super::{check_pdf_extension, load_config};

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: DetectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    check_pdf_extension(&args.input)?;

    let data = fs::read(&args.input)?;
    let mut extractor = PdfTextExtractor::new();
    extractor.load(&data)?;
    debug!("PDF has {} pages", extractor.page_count());

    let text = extractor
        .extract_leading_text(config.pdf.max_pages, config.pdf.min_text_length)?
        .joined();

    let family = detect_family(&text);
    println!("{} {}: {}", style("ℹ").blue(), args.input.display(), family);

    Ok(())
}
