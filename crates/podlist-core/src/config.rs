use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PodError;
use crate::parsing::layout::LayoutMode;

/// Smallest page that can hold a group header, column header and one record.
const MIN_LINES_PER_PAGE: usize = 8;

/// Import and export settings. Every field has a default, so an empty JSON
/// object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Worksheet holding the batch list.
    pub sheet_name: String,
    /// 0-based index of the first data row; earlier rows are title and header.
    pub data_start_row: usize,
    pub layout: LayoutMode,
    /// Prefix of exported file names.
    pub file_prefix: String,
    pub document: DocumentConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub lines_per_page: usize,
    /// Paper types longer than this are cut and marked with "..".
    pub paper_type_width: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            sheet_name: "Master list".into(),
            data_start_row: 2,
            layout: LayoutMode::Auto,
            file_prefix: "Clays_POD_WTL".into(),
            document: DocumentConfig::default(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            lines_per_page: 52,
            paper_type_width: 20,
        }
    }
}

/// Load a config from a JSON file.
pub fn load_config(path: &Path) -> Result<PipelineConfig, PodError> {
    let content = std::fs::read_to_string(path).map_err(|e| PodError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: PipelineConfig =
        serde_json::from_str(&content).map_err(|e| PodError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a config from a JSON string.
pub fn parse_config_str(json: &str) -> Result<PipelineConfig, PodError> {
    let config: PipelineConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &PipelineConfig) -> Result<(), PodError> {
    if config.sheet_name.trim().is_empty() {
        return Err(PodError::ConfigInvalid(
            "sheet_name must not be empty".into(),
        ));
    }

    if config.file_prefix.trim().is_empty() {
        return Err(PodError::ConfigInvalid(
            "file_prefix must not be empty".into(),
        ));
    }

    if config.document.lines_per_page < MIN_LINES_PER_PAGE {
        return Err(PodError::ConfigInvalid(format!(
            "document.lines_per_page must be at least {} (got {})",
            MIN_LINES_PER_PAGE, config.document.lines_per_page
        )));
    }

    if config.document.paper_type_width == 0 {
        return Err(PodError::ConfigInvalid(
            "document.paper_type_width must be positive".into(),
        ));
    }

    Ok(())
}
