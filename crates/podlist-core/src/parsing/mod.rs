pub mod date;
pub mod layout;
pub mod values;

use tracing::debug;

use crate::catalog::PaperType;
use crate::model::{BatchRecord, PipelineResult, RawRow, SkipReason, SkippedRow, Stream};
use layout::RowLayout;
use values::coerce_quantity;

/// Result of validating a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Record(Stream, BatchRecord),
    Skip(SkipReason),
}

/// Validate and classify every data row, starting at `start_row`.
///
/// Rows are independent: a malformed row is recorded in `skipped` and
/// never stops the rest of the sheet from being read.
pub fn classify_rows(rows: &[RawRow], start_row: usize, layout: RowLayout) -> PipelineResult {
    let mut result = PipelineResult {
        layout: Some(layout),
        ..Default::default()
    };

    for (index, row) in rows.iter().enumerate().skip(start_row) {
        match classify_row(row, layout) {
            RowOutcome::Record(Stream::Standard, record) => result.standard.push(record),
            RowOutcome::Record(Stream::Alternate, record) => result.alternate.push(record),
            RowOutcome::Skip(reason) => {
                debug!(row = index + 1, %reason, "skipping row");
                result.skipped.push(SkippedRow {
                    row_number: index + 1,
                    reason,
                });
            }
        }
    }

    result
}

/// Decide whether one row becomes a record, and in which stream.
pub fn classify_row(row: &RawRow, layout: RowLayout) -> RowOutcome {
    if row.iter().all(|cell| cell.trim().is_empty()) {
        return RowOutcome::Skip(SkipReason::EmptyRow);
    }

    if cell(row, RowLayout::PAPER_TYPE)
        .to_lowercase()
        .contains("total")
    {
        return RowOutcome::Skip(SkipReason::TotalRow);
    }

    let paper_type = cell(row, RowLayout::PAPER_TYPE).trim();
    let text_batch = cell(row, layout.text_batch()).trim();
    let cover_batch = cell(row, layout.cover_batch()).trim();
    let order_date = cell(row, layout.order_date()).trim();
    let style = layout.style().map(|i| cell(row, i).trim()).unwrap_or("");

    if paper_type.is_empty() {
        return RowOutcome::Skip(SkipReason::MissingPaperType);
    }
    if text_batch.is_empty() {
        return RowOutcome::Skip(SkipReason::MissingTextBatch);
    }
    if cover_batch.is_empty() {
        return RowOutcome::Skip(SkipReason::MissingCoverBatch);
    }

    let stream = Stream::from_style(style);
    let quantity_column = match (stream, layout.book_quantity()) {
        (Stream::Alternate, Some(book)) => book,
        _ => RowLayout::FILE_QUANTITY,
    };
    let raw_quantity = cell(row, quantity_column).trim();
    if raw_quantity.is_empty() {
        return RowOutcome::Skip(SkipReason::MissingQuantity);
    }

    let quantity = match coerce_quantity(raw_quantity) {
        Some(q) if q > 0 => q,
        _ => return RowOutcome::Skip(SkipReason::NonPositiveQuantity),
    };

    let record = BatchRecord {
        paper_type: paper_type.to_string(),
        paper_code: PaperType::parse(paper_type).code().to_string(),
        text_batch_number: text_batch.to_string(),
        cover_batch_number: cover_batch.to_string(),
        quantity,
        order_date: order_date.to_string(),
        style: style.to_string(),
    };
    RowOutcome::Record(stream, record)
}

/// Cell text at `index`, or "" past the end of a short row.
fn cell(row: &RawRow, index: usize) -> &str {
    row.get(index).map(|s| s.as_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn record_of(outcome: RowOutcome) -> (Stream, BatchRecord) {
        match outcome {
            RowOutcome::Record(stream, record) => (stream, record),
            RowOutcome::Skip(reason) => panic!("expected a record, got skip: {reason}"),
        }
    }

    #[test]
    fn test_standard_row_uses_file_quantity() {
        let r = row(&["Bulky 52 / 115", "10", "5", "101", "C1", "Tuesday 29th", ""]);
        let (stream, rec) = record_of(classify_row(&r, RowLayout::Current));
        assert_eq!(stream, Stream::Standard);
        assert_eq!(rec.quantity, 10);
        assert_eq!(rec.paper_code, "DCLAY 01");
        assert_eq!(rec.order_date, "Tuesday 29th");
    }

    #[test]
    fn test_4pp_row_uses_book_quantity() {
        let r = row(&["Cream 65 / 138", "10", "5", "102", "C2", "Friday 1st", "4pp"]);
        let (stream, rec) = record_of(classify_row(&r, RowLayout::Current));
        assert_eq!(stream, Stream::Alternate);
        assert_eq!(rec.quantity, 5);
        assert_eq!(rec.paper_type, "Cream 65 / 138");
        assert_eq!(rec.paper_code, "DCLAY 02");
    }

    #[test]
    fn test_4pp_style_any_case_and_padded() {
        let r = row(&["Book 52 / 82", "10", "7", "1", "C", "", "  4PP "]);
        let (stream, rec) = record_of(classify_row(&r, RowLayout::Current));
        assert_eq!(stream, Stream::Alternate);
        assert_eq!(rec.quantity, 7);
        assert_eq!(rec.style, "4PP");
    }

    #[test]
    fn test_4pp_ignores_file_quantity() {
        // Book quantity empty: the row is dropped even though file quantity is set.
        let r = row(&["Book 52 / 82", "10", "", "1", "C", "", "4pp"]);
        assert_eq!(
            classify_row(&r, RowLayout::Current),
            RowOutcome::Skip(SkipReason::MissingQuantity)
        );
    }

    #[test]
    fn test_total_row_skipped() {
        let r = row(&["TOTAL", "100", "", "", "", "", ""]);
        assert_eq!(
            classify_row(&r, RowLayout::Current),
            RowOutcome::Skip(SkipReason::TotalRow)
        );
        let r = row(&["Grand Total copies", "1", "1", "1", "C", "", ""]);
        assert_eq!(
            classify_row(&r, RowLayout::Current),
            RowOutcome::Skip(SkipReason::TotalRow)
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let cases = [
            (row(&["  ", "1", "", "1", "C"]), SkipReason::MissingPaperType),
            (
                row(&["Book 52 / 82", "1", "", " ", "C"]),
                SkipReason::MissingTextBatch,
            ),
            (
                row(&["Book 52 / 82", "1", "", "1", ""]),
                SkipReason::MissingCoverBatch,
            ),
            (row(&["Book 52 / 82", "1", "", "1"]), SkipReason::MissingCoverBatch),
        ];
        for (r, reason) in cases {
            assert_eq!(classify_row(&r, RowLayout::Current), RowOutcome::Skip(reason));
        }
    }

    #[test]
    fn test_empty_row_skipped() {
        assert_eq!(
            classify_row(&Vec::new(), RowLayout::Current),
            RowOutcome::Skip(SkipReason::EmptyRow)
        );
        assert_eq!(
            classify_row(&row(&["", " ", ""]), RowLayout::Current),
            RowOutcome::Skip(SkipReason::EmptyRow)
        );
    }

    #[test]
    fn test_non_positive_quantity_skipped() {
        for q in ["0", "-4", "abc", "0.0"] {
            let r = row(&["Book 52 / 82", q, "", "1", "C", "", ""]);
            assert_eq!(
                classify_row(&r, RowLayout::Current),
                RowOutcome::Skip(SkipReason::NonPositiveQuantity),
                "quantity {q:?}"
            );
        }
    }

    #[test]
    fn test_fractional_quantity_truncated() {
        let r = row(&["Book 52 / 82", "12.8", "", "1", "C", "", ""]);
        let (_, rec) = record_of(classify_row(&r, RowLayout::Current));
        assert_eq!(rec.quantity, 12);
    }

    #[test]
    fn test_quantity_below_one_kept() {
        let r = row(&["Bulky 52 / 115", "0.5", "", "1", "C", "", ""]);
        let (stream, rec) = record_of(classify_row(&r, RowLayout::Current));
        assert_eq!(stream, Stream::Standard);
        assert_eq!(rec.quantity, 1);
    }

    #[test]
    fn test_unknown_paper_type_kept() {
        let r = row(&["Matt 80 / 150", "3", "", "9", "C9", "", ""]);
        let (_, rec) = record_of(classify_row(&r, RowLayout::Current));
        assert_eq!(rec.paper_code, "Unknown");
    }

    #[test]
    fn test_legacy_layout() {
        let r = row(&["Book 55 / 108", "25", "301", "C301", "15/03/25"]);
        let (stream, rec) = record_of(classify_row(&r, RowLayout::Legacy));
        assert_eq!(stream, Stream::Standard);
        assert_eq!(rec.quantity, 25);
        assert_eq!(rec.text_batch_number, "301");
        assert_eq!(rec.cover_batch_number, "C301");
        assert_eq!(rec.order_date, "15/03/25");
        assert_eq!(rec.style, "");
    }

    #[test]
    fn test_classify_rows_skips_title_and_header() {
        let rows = vec![
            row(&["PoD master list"]),
            row(&["Paper", "File Qty", "Book Qty", "Text", "Cover", "Date", "Style"]),
            row(&["Bulky 52 / 115", "10", "5", "101", "C1", "Tuesday 29th", ""]),
            row(&["Cream 65 / 138", "10", "5", "102", "C2", "Friday 1st", "4pp"]),
            row(&["TOTAL", "20", "", "", "", "", ""]),
        ];
        let result = classify_rows(&rows, 2, RowLayout::Current);
        assert_eq!(result.standard.len(), 1);
        assert_eq!(result.alternate.len(), 1);
        assert_eq!(
            result.skipped,
            vec![SkippedRow {
                row_number: 5,
                reason: SkipReason::TotalRow
            }]
        );
        assert_eq!(result.layout, Some(RowLayout::Current));
    }
}
