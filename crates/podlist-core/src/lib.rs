pub mod catalog;
pub mod config;
pub mod error;
pub mod extraction;
pub mod grouping;
pub mod model;
pub mod parsing;
pub mod report;
pub mod session;

use config::PipelineConfig;
use error::PodError;
use extraction::SheetReader;
use model::{PipelineResult, RawRow};
use parsing::layout::RowLayout;

/// Main API entry point: read the configured sheet from a workbook and
/// classify its rows into the standard and 4pp streams.
///
/// Fails only for problems with the file as a whole (wrong extension,
/// missing sheet, too few rows, unreadable bytes). Bad individual rows are
/// skipped and listed in `PipelineResult::skipped`.
pub fn import_workbook(
    file_name: &str,
    bytes: &[u8],
    reader: &dyn SheetReader,
    config: &PipelineConfig,
) -> Result<PipelineResult, PodError> {
    extraction::check_extension(file_name)?;

    let rows = reader.read_sheet(bytes, &config.sheet_name)?;
    tracing::debug!(
        backend = reader.backend_name(),
        rows = rows.len(),
        sheet = %config.sheet_name,
        "sheet decoded"
    );

    process_rows(&rows, config)
}

/// Classify already-decoded rows. Rows before `config.data_start_row` are
/// title and header; the header row picks the layout in auto mode.
pub fn process_rows(rows: &[RawRow], config: &PipelineConfig) -> Result<PipelineResult, PodError> {
    if rows.len() <= config.data_start_row {
        return Err(PodError::InsufficientRows { found: rows.len() });
    }

    let header = config
        .data_start_row
        .checked_sub(1)
        .and_then(|i| rows.get(i));
    let layout = RowLayout::resolve(config.layout, header);

    let result = parsing::classify_rows(rows, config.data_start_row, layout);
    session::log_import(&result);
    Ok(result)
}
