use podlist_core::error::PodError;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    config: Option<PathBuf>,
    out_dir: PathBuf,
    format: &str,
) -> Result<(), PodError> {
    let bench = super::import(&input_file, config)?;

    let Some(document) = bench.document() else {
        eprintln!("No data to download.");
        return Ok(());
    };

    let (ext, contents) = match format {
        "json" => ("json", serde_json::to_string_pretty(&document)?),
        "text" => ("txt", document.render_text()),
        other => {
            return Err(PodError::ConfigInvalid(format!(
                "unknown export format '{other}' (expected text or json)"
            )))
        }
    };

    std::fs::create_dir_all(&out_dir)?;
    let path = out_dir.join(bench.export_file_name(ext));
    std::fs::write(&path, contents)?;

    tracing::info!(path = %path.display(), pages = document.page_count(), "work list written");
    eprintln!("Wrote {} ({} pages)", path.display(), document.page_count());
    Ok(())
}
