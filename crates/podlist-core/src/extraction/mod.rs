pub mod xlsx;

use std::path::Path;

use crate::error::PodError;
use crate::model::RawRow;

/// File extensions accepted for import (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm"];

/// Trait for spreadsheet decoding backends.
pub trait SheetReader: Send + Sync {
    /// Decode one named sheet into rows of string cells, in sheet order.
    ///
    /// A missing sheet is `PodError::SheetNotFound`; undecodable bytes are
    /// `PodError::Read`.
    fn read_sheet(&self, bytes: &[u8], sheet_name: &str) -> Result<Vec<RawRow>, PodError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Reject files that are not Excel workbooks before reading them.
pub fn check_extension(file_name: &str) -> Result<(), PodError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if SUPPORTED_EXTENSIONS
        .iter()
        .any(|s| ext.eq_ignore_ascii_case(s))
    {
        Ok(())
    } else {
        Err(PodError::UnsupportedExtension(file_name.to_string()))
    }
}
