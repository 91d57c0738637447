use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum PodError {
    #[error("Please select an Excel file (.xlsx or .xlsm).")]
    UnsupportedExtension(String),

    #[error("Error: \"{sheet}\" sheet not found in the Excel file. Available sheets: {}", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("Excel file appears to be empty or missing data. Found {found} rows.")]
    InsufficientRows { found: usize },

    #[error("Error reading Excel file: {0}. Please ensure the file is not corrupted and contains the expected sheet.")]
    Read(String),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PodError {
    /// Severity shown to the user when this error ends an import.
    pub fn severity(&self) -> Severity {
        Severity::Danger
    }

    pub fn to_status(&self) -> StatusMessage {
        StatusMessage::new(self.severity(), self.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// Free-text status reported back to whoever triggered an import or clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub severity: Severity,
    pub message: String,
}

impl StatusMessage {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        StatusMessage {
            severity,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_not_found_lists_available_sheets() {
        let err = PodError::SheetNotFound {
            sheet: "Master list".into(),
            available: vec!["Sheet1".into(), "Notes".into()],
        };
        let status = err.to_status();
        assert_eq!(status.severity, Severity::Danger);
        assert_eq!(
            status.message,
            "Error: \"Master list\" sheet not found in the Excel file. Available sheets: Sheet1, Notes"
        );
    }

    #[test]
    fn test_insufficient_rows_reports_count() {
        let err = PodError::InsufficientRows { found: 2 };
        assert!(err.to_string().contains("Found 2 rows"));
    }
}
