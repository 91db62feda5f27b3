//! Rename command - process a single payment advice file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use padv_core::advice::rename_pdf;

use super::{check_pdf_extension, load_config};

/// Arguments for the rename command.
#[derive(Args)]
pub struct RenameArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Period code (e.g. P8, 8, p2x)
    #[arg(short, long)]
    period: String,

    /// Directory for the renamed file (default: alongside the input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the new name without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Refuse documents that do not sniff as payment advices
    #[arg(long)]
    require_advice: bool,
}

pub async fn run(args: RenameArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if args.require_advice {
        config.detection.require_payment_advice = true;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    check_pdf_extension(&args.input)?;

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let new_name = rename_pdf(&data, &args.period, &config)?;

    if args.dry_run {
        println!("{}", new_name);
        return Ok(());
    }

    let target = target_path(&args.input, args.output_dir.as_deref(), &new_name)?;
    if target.exists() {
        anyhow::bail!(
            "Target file already exists, refusing to overwrite: {}",
            target.display()
        );
    }

    place_file(&args.input, &target, args.output_dir.is_some())?;

    println!(
        "{} {} -> {}",
        style("✓").green(),
        args.input.display(),
        target.display()
    );

    Ok(())
}

/// Resolve the destination path for a renamed file.
pub fn target_path(
    input: &Path,
    output_dir: Option<&Path>,
    new_name: &str,
) -> anyhow::Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            dir.to_path_buf()
        }
        None => input.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };
    Ok(dir.join(new_name))
}

/// Move or copy the original bytes to the target. A separate output
/// directory gets a copy; an in-place rename moves the file.
pub fn place_file(input: &Path, target: &Path, copy: bool) -> anyhow::Result<()> {
    if copy {
        fs::copy(input, target)?;
        debug!("Copied {} to {}", input.display(), target.display());
    } else {
        fs::rename(input, target)?;
        debug!("Renamed {} to {}", input.display(), target.display());
    }
    Ok(())
}
