use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::{PodError, Severity, StatusMessage};
use crate::extraction::SheetReader;
use crate::model::PipelineResult;
use crate::report::document::{build_document, Document};
use crate::report::filename::export_file_name;
use crate::report::Report;

/// Holds the current import and the last status shown to the user.
///
/// Each import replaces the held result wholesale. Fatal errors leave the
/// previous result in place; `clear` swaps in the empty result.
#[derive(Debug, Default)]
pub struct Workbench {
    config: PipelineConfig,
    result: PipelineResult,
    status: Option<StatusMessage>,
}

impl Workbench {
    pub fn new(config: PipelineConfig) -> Self {
        Workbench {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn result(&self) -> &PipelineResult {
        &self.result
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Import a workbook and report the outcome as a status message.
    pub fn import(
        &mut self,
        file_name: &str,
        bytes: &[u8],
        reader: &dyn SheetReader,
    ) -> StatusMessage {
        match self.try_import(file_name, bytes, reader) {
            Ok(status) => status.clone(),
            Err(e) => e.to_status(),
        }
    }

    /// Like `import`, but hands fatal errors back to the caller as well.
    /// The status message is recorded either way.
    pub fn try_import(
        &mut self,
        file_name: &str,
        bytes: &[u8],
        reader: &dyn SheetReader,
    ) -> Result<&StatusMessage, PodError> {
        match crate::import_workbook(file_name, bytes, reader, &self.config) {
            Ok(result) => {
                let status = import_status(&result);
                self.result = result;
                Ok(self.status.insert(status))
            }
            Err(e) => {
                warn!(file = file_name, error = %e, "import failed");
                self.status = Some(e.to_status());
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) -> &StatusMessage {
        self.result = PipelineResult::default();
        self.status.insert(StatusMessage::new(
            Severity::Success,
            "Application cleared successfully. Ready for new upload.",
        ))
    }

    /// Group and order the current result. Recomputed on every call.
    pub fn report(&self) -> Report {
        Report::build(&self.result)
    }

    /// Paginated export of the current result, or None when there is nothing
    /// to export.
    pub fn document(&self) -> Option<Document> {
        if self.result.is_empty() {
            return None;
        }
        Some(build_document(&self.report(), &self.config.document))
    }

    pub fn export_file_name(&self, ext: &str) -> String {
        export_file_name(
            &self.config.file_prefix,
            self.result.representative_order_date(),
            ext,
        )
    }
}

/// Status for an import that read the sheet successfully.
pub fn import_status(result: &PipelineResult) -> StatusMessage {
    if result.is_empty() {
        warn!(skipped = result.skipped.len(), "no valid batch rows found");
        return StatusMessage::new(
            Severity::Warning,
            "No valid batch data found in the Excel file.",
        );
    }

    StatusMessage::new(
        Severity::Success,
        format!(
            "Loaded {} batches ({} standard, {} 4pp).",
            result.record_count(),
            result.standard.len(),
            result.alternate.len()
        ),
    )
}

pub(crate) fn log_import(result: &PipelineResult) {
    info!(
        layout = ?result.layout,
        standard = result.standard.len(),
        alternate = result.alternate.len(),
        skipped = result.skipped.len(),
        "import complete"
    );
}
