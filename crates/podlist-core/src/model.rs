use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parsing::layout::RowLayout;
use crate::parsing::values::parse_leading_int;

/// One decoded spreadsheet row, cells in column order.
pub type RawRow = Vec<String>;

/// The style token that moves a row into the alternate stream.
pub const ALTERNATE_STYLE: &str = "4pp";

/// Which report section a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Standard,
    Alternate,
}

impl Stream {
    /// Classify by style: `4pp` (any case, exact otherwise) is alternate.
    pub fn from_style(style: &str) -> Stream {
        if style.eq_ignore_ascii_case(ALTERNATE_STYLE) {
            Stream::Alternate
        } else {
            Stream::Standard
        }
    }

    /// Column header used for the quantity in printed reports.
    pub fn quantity_label(&self) -> &'static str {
        match self {
            Stream::Standard => "Rows",
            Stream::Alternate => "Print Qty",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Standard => write!(f, "standard"),
            Stream::Alternate => write!(f, "4pp"),
        }
    }
}

/// A validated, normalized production batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub paper_type: String,
    /// Derived from the catalog; `"Unknown"` for unmapped paper types.
    pub paper_code: String,
    pub text_batch_number: String,
    pub cover_batch_number: String,
    pub quantity: u32,
    pub order_date: String,
    pub style: String,
}

impl BatchRecord {
    /// Numeric sort key of the text batch; non-numeric values count as 0.
    pub fn batch_key(&self) -> i64 {
        parse_leading_int(&self.text_batch_number).unwrap_or(0)
    }

    pub fn stream(&self) -> Stream {
        Stream::from_style(&self.style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    EmptyRow,
    TotalRow,
    MissingPaperType,
    MissingTextBatch,
    MissingCoverBatch,
    MissingQuantity,
    NonPositiveQuantity,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::EmptyRow => "empty row",
            SkipReason::TotalRow => "total row",
            SkipReason::MissingPaperType => "missing paper type",
            SkipReason::MissingTextBatch => "missing text batch",
            SkipReason::MissingCoverBatch => "missing cover batch",
            SkipReason::MissingQuantity => "missing quantity",
            SkipReason::NonPositiveQuantity => "quantity is not a positive number",
        };
        f.write_str(text)
    }
}

/// A row that produced no record. `row_number` is 1-based, as shown in Excel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row_number: usize,
    pub reason: SkipReason,
}

/// Everything one import produces. Replaced wholesale on every import;
/// `PipelineResult::default()` is the cleared state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub standard: Vec<BatchRecord>,
    pub alternate: Vec<BatchRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<RowLayout>,
}

impl PipelineResult {
    pub fn record_count(&self) -> usize {
        self.standard.len() + self.alternate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    pub fn stream(&self, stream: Stream) -> &[BatchRecord] {
        match stream {
            Stream::Standard => &self.standard,
            Stream::Alternate => &self.alternate,
        }
    }

    /// Order date used to name exports: the first standard record's date,
    /// or the first alternate record's when there are no standard records.
    pub fn representative_order_date(&self) -> &str {
        self.standard
            .first()
            .or_else(|| self.alternate.first())
            .map(|r| r.order_date.as_str())
            .unwrap_or("")
    }
}
