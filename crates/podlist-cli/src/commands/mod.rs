pub mod catalog;
pub mod export;
pub mod show;

use podlist_core::config::{load_config, PipelineConfig};
use podlist_core::error::PodError;
use podlist_core::extraction::xlsx::XlsxSheetReader;
use podlist_core::session::Workbench;
use std::path::{Path, PathBuf};

/// Build a workbench from the optional config file and import one workbook.
///
/// The status message goes to stderr. Fatal import errors are also returned
/// so the process exits non-zero.
pub fn import(input_file: &Path, config: Option<PathBuf>) -> Result<Workbench, PodError> {
    let config = match config {
        Some(path) => load_config(&path)?,
        None => PipelineConfig::default(),
    };

    let bytes = std::fs::read(input_file)?;
    let file_name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut bench = Workbench::new(config);
    let outcome = bench
        .try_import(&file_name, &bytes, &XlsxSheetReader::new())
        .map(|_| ());
    if let Some(status) = bench.status() {
        eprintln!("[{}] {}", status.severity, status.message);
    }
    outcome?;

    Ok(bench)
}
