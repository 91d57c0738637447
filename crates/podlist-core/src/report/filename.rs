use chrono::{Local, NaiveDate};

use crate::parsing::date::normalize_on;

/// Name for an exported document: `<prefix>_<YYYY-MM-DD>.<ext>`, the date
/// taken from the report's representative order date.
pub fn export_file_name(prefix: &str, order_date: &str, ext: &str) -> String {
    export_file_name_on(prefix, order_date, ext, Local::now().date_naive())
}

pub fn export_file_name_on(prefix: &str, order_date: &str, ext: &str, today: NaiveDate) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        normalize_on(order_date, today),
        ext.trim_start_matches('.')
    )
}
