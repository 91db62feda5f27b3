//! Batch command - rename a directory or glob of payment advice files.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use padv_core::advice::rename_pdf;

use super::load_config;
use super::rename::{place_file, target_path};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input directory or glob pattern
    #[arg(required = true)]
    input: String,

    /// Period code applied to every file
    #[arg(short, long)]
    period: String,

    /// Directory for renamed files (default: alongside each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Directory for files that could not be processed; they keep
    /// their original names
    #[arg(long)]
    error_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Refuse documents that do not sniff as payment advices
    #[arg(long)]
    require_advice: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    new_name: Option<String>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if args.require_advice {
        config.detection.require_payment_advice = true;
    }

    let files = collect_inputs(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("No PDF files found for input: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // One failure never aborts the batch; each file is isolated.
    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let result = match process_one(&path, &args, &config) {
            Ok(new_name) => FileResult {
                path,
                new_name: Some(new_name),
                error: None,
            },
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                route_to_error_dir(&path, args.error_dir.as_deref());
                FileResult {
                    path,
                    new_name: None,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(result);
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let succeeded = results.iter().filter(|r| r.new_name.is_some()).count();
    let failed = results.len() - succeeded;

    println!();
    println!(
        "{} Processed {} files: {} successful, {} failed",
        style("✓").green(),
        results.len(),
        style(succeeded).green(),
        style(failed).red()
    );

    if failed > 0 {
        println!();
        println!("{}", style("Failed files:").red());
        for result in results.iter().filter(|r| r.error.is_some()) {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Expand a directory path or glob pattern into the PDF files to
/// process.
fn collect_inputs(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let input_path = PathBuf::from(input);
    let pattern = if input_path.is_dir() {
        format!("{}/*.pdf", input.trim_end_matches('/'))
    } else {
        input.to_string()
    };

    let files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    Ok(files)
}

fn process_one(
    path: &PathBuf,
    args: &BatchArgs,
    config: &padv_core::PadvConfig,
) -> anyhow::Result<String> {
    let data = fs::read(path)?;
    let new_name = rename_pdf(&data, &args.period, config)?;

    let target = target_path(path, args.output_dir.as_deref(), &new_name)?;
    if target.exists() {
        anyhow::bail!(
            "Target file already exists, refusing to overwrite: {}",
            target.display()
        );
    }
    place_file(path, &target, args.output_dir.is_some())?;

    Ok(new_name)
}

/// Copy a failed file, under its original name, into the error bucket.
fn route_to_error_dir(path: &PathBuf, error_dir: Option<&std::path::Path>) {
    let Some(dir) = error_dir else {
        return;
    };
    let Some(file_name) = path.file_name() else {
        return;
    };
    if let Err(e) = fs::create_dir_all(dir).and_then(|_| {
        fs::copy(path, dir.join(file_name)).map(|_| ())
    }) {
        warn!("Failed to route {} to error dir: {}", path.display(), e);
    }
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "status", "new_name", "error"])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let status = if result.new_name.is_some() {
            "success"
        } else {
            "failed"
        };
        wtr.write_record([
            filename,
            status,
            result.new_name.as_deref().unwrap_or(""),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
