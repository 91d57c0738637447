use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::PodError;
use crate::extraction::SheetReader;
use crate::model::RawRow;

/// Sheet reader for .xlsx and macro-enabled .xlsm workbooks, via calamine.
///
/// Cells are turned into display strings: whole numbers without a decimal
/// point, date cells as `DD/MM/YYYY`. Rows with no content at all are
/// dropped, so the title row is always row 0 even if the sheet starts with
/// blank lines.
#[derive(Debug, Default)]
pub struct XlsxSheetReader;

impl XlsxSheetReader {
    pub fn new() -> Self {
        XlsxSheetReader
    }
}

impl SheetReader for XlsxSheetReader {
    fn read_sheet(&self, bytes: &[u8], sheet_name: &str) -> Result<Vec<RawRow>, PodError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| PodError::Read(format!("failed to open workbook: {e}")))?;

        let available = workbook.sheet_names();
        if !available.iter().any(|name| name == sheet_name) {
            return Err(PodError::SheetNotFound {
                sheet: sheet_name.to_string(),
                available,
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| PodError::Read(format!("failed to read sheet '{sheet_name}': {e}")))?;

        Ok(rows_from_range(&range))
    }

    fn backend_name(&self) -> &str {
        "calamine-xlsx"
    }
}

/// Stringify a sheet, dropping rows with no content.
fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    range
        .rows()
        .map(|row| row.iter().map(cell_as_string).collect::<RawRow>())
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .collect()
}

fn cell_as_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => format_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => value.format("%d/%m/%Y").to_string(),
            None => format_float(dt.as_f64()),
        },
        Data::Empty => String::new(),
        other => format!("{other}"),
    }
}

/// Whole floats print without a fractional part ("10", not "10.0").
fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
