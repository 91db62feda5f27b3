//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod detect;
pub mod rename;

use std::path::Path;

use padv_core::PadvConfig;

/// Load the pipeline configuration, falling back to defaults when no
/// config file is given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PadvConfig> {
    match config_path {
        Some(path) => Ok(PadvConfig::from_file(Path::new(path))?),
        None => Ok(PadvConfig::default()),
    }
}

/// Reject inputs that are not PDF files by extension.
pub fn check_pdf_extension(path: &Path) -> anyhow::Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }
    Ok(())
}
