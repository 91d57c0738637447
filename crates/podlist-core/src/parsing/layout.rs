use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::RawRow;

/// How the layout is chosen for an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Auto,
    Current,
    Legacy,
}

/// Column arrangement of the master list.
///
/// `Current` has seven columns: paper type, file quantity, book quantity,
/// text batch, cover batch, date, style. `Legacy` has five: paper type,
/// quantity, text batch, cover batch, date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowLayout {
    Current,
    Legacy,
}

/// Header rows at least this wide are treated as the current layout.
const CURRENT_MIN_WIDTH: usize = 6;

impl RowLayout {
    pub const PAPER_TYPE: usize = 0;
    pub const FILE_QUANTITY: usize = 1;

    pub fn book_quantity(&self) -> Option<usize> {
        match self {
            RowLayout::Current => Some(2),
            RowLayout::Legacy => None,
        }
    }

    pub fn text_batch(&self) -> usize {
        match self {
            RowLayout::Current => 3,
            RowLayout::Legacy => 2,
        }
    }

    pub fn cover_batch(&self) -> usize {
        match self {
            RowLayout::Current => 4,
            RowLayout::Legacy => 3,
        }
    }

    pub fn order_date(&self) -> usize {
        match self {
            RowLayout::Current => 5,
            RowLayout::Legacy => 4,
        }
    }

    pub fn style(&self) -> Option<usize> {
        match self {
            RowLayout::Current => Some(6),
            RowLayout::Legacy => None,
        }
    }

    /// Resolve the layout for one import. In `Auto` mode the header row's
    /// width decides; a missing header falls back to the current layout.
    pub fn resolve(mode: LayoutMode, header: Option<&RawRow>) -> RowLayout {
        match mode {
            LayoutMode::Current => RowLayout::Current,
            LayoutMode::Legacy => RowLayout::Legacy,
            LayoutMode::Auto => match header {
                Some(row) if used_width(row) < CURRENT_MIN_WIDTH => RowLayout::Legacy,
                _ => RowLayout::Current,
            },
        }
    }
}

impl fmt::Display for RowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLayout::Current => write!(f, "7-column"),
            RowLayout::Legacy => write!(f, "5-column (legacy)"),
        }
    }
}

/// Number of cells up to and including the last non-blank one.
fn used_width(row: &RawRow) -> usize {
    row.iter()
        .rposition(|cell| !cell.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_detects_current() {
        let header = row(&[
            "Paper", "File Qty", "Book Qty", "Text", "Cover", "Date", "Style",
        ]);
        assert_eq!(
            RowLayout::resolve(LayoutMode::Auto, Some(&header)),
            RowLayout::Current
        );
    }

    #[test]
    fn test_auto_detects_legacy_ignoring_trailing_blanks() {
        let header = row(&["Paper", "Qty", "Text", "Cover", "Date", "", ""]);
        assert_eq!(
            RowLayout::resolve(LayoutMode::Auto, Some(&header)),
            RowLayout::Legacy
        );
    }

    #[test]
    fn test_auto_without_header_is_current() {
        assert_eq!(RowLayout::resolve(LayoutMode::Auto, None), RowLayout::Current);
    }

    #[test]
    fn test_forced_mode_wins() {
        let header = row(&["Paper", "Qty"]);
        assert_eq!(
            RowLayout::resolve(LayoutMode::Current, Some(&header)),
            RowLayout::Current
        );
    }

    #[test]
    fn test_legacy_columns() {
        let l = RowLayout::Legacy;
        assert_eq!(l.text_batch(), 2);
        assert_eq!(l.order_date(), 4);
        assert!(l.book_quantity().is_none());
        assert!(l.style().is_none());
    }
}
