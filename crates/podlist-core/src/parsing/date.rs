//! Best-effort conversion of free-text order dates to `YYYY-MM-DD`.
//!
//! The master lists label days loosely ("Tuesday 29th", "15/03/25",
//! "July 29"). The result only names exported files, so this never fails:
//! anything unrecognised becomes today's date.

use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Year assumed when the text carries no year.
pub const ASSUMED_YEAR: i32 = 2025;

/// Month used for ordinal days 29-31 when no month is named.
const LATE_DAY_MONTH: u32 = 7;
/// Month used for other ordinal days when no month is named.
const EARLY_DAY_MONTH: u32 = 8;

const MONTH_PATTERN: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

static ORDINAL_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\D)(\d{1,2})(?:st|nd|rd|th)\b").expect("valid regex"));

static MONTH_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b({MONTH_PATTERN})\b")).expect("valid regex"));

static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{2,4})").expect("valid regex"));

static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({MONTH_PATTERN})\s+(\d{{1,2}})\b")).expect("valid regex")
});

/// Normalize an order date against the system clock.
pub fn normalize(raw: &str) -> String {
    normalize_on(raw, Local::now().date_naive())
}

/// Normalize an order date, using `today` for empty or unrecognised input.
pub fn normalize_on(raw: &str, today: NaiveDate) -> String {
    parse_order_date(raw)
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

/// Try each recognised form in turn; None when nothing matches.
pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    ordinal_day(text)
        .or_else(|| numeric_date(text))
        .or_else(|| month_then_day(text))
}

/// "Tuesday 29th", "1st Aug", "Friday 1st".
///
/// Without a month name the month is a guess fixed to one historical
/// batch: 29th-31st are July, any other day is August.
fn ordinal_day(text: &str) -> Option<NaiveDate> {
    let caps = ORDINAL_DAY.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }

    let month = match MONTH_NAME.captures(text) {
        Some(m) => month_number(&m[1])?,
        None if day >= 29 => LATE_DAY_MONTH,
        None => EARLY_DAY_MONTH,
    };
    NaiveDate::from_ymd_opt(ASSUMED_YEAR, month, day)
}

/// "15/03/25", "1-8-2025". Day first, two-digit years are 20xx.
fn numeric_date(text: &str) -> Option<NaiveDate> {
    let caps = NUMERIC_DATE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year_text = &caps[3];
    let year: i32 = if year_text.len() == 2 {
        format!("20{year_text}").parse().ok()?
    } else {
        year_text.parse().ok()?
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// "July 29", "Aug 1".
fn month_then_day(text: &str) -> Option<NaiveDate> {
    let caps = MONTH_DAY.captures(text)?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(ASSUMED_YEAR, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let month = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_empty_is_today() {
        assert_eq!(normalize_on("", today()), "2026-10-19");
        assert_eq!(normalize_on("   ", today()), "2026-10-19");
    }

    #[test]
    fn test_ordinal_late_days_are_july() {
        assert_eq!(normalize_on("Tuesday 29th", today()), "2025-07-29");
        assert_eq!(normalize_on("Wednesday 30th", today()), "2025-07-30");
        assert_eq!(normalize_on("Thursday 31st", today()), "2025-07-31");
    }

    #[test]
    fn test_ordinal_other_days_are_august() {
        assert_eq!(normalize_on("Friday 1st", today()), "2025-08-01");
        assert_eq!(normalize_on("Saturday 2nd", today()), "2025-08-02");
        assert_eq!(normalize_on("Sunday 3rd", today()), "2025-08-03");
        assert_eq!(normalize_on("Monday 18th", today()), "2025-08-18");
    }

    #[test]
    fn test_ordinal_glued_to_weekday() {
        assert_eq!(normalize_on("Tuesday29th", today()), "2025-07-29");
        assert_eq!(normalize_on("Fri1st", today()), "2025-08-01");
        assert_eq!(normalize_on("123rd", today()), "2026-10-19");
    }

    #[test]
    fn test_ordinal_with_month_name() {
        assert_eq!(normalize_on("Monday 3rd March", today()), "2025-03-03");
        assert_eq!(normalize_on("29th Sept", today()), "2025-09-29");
        assert_eq!(normalize_on("1ST DEC", today()), "2025-12-01");
    }

    #[test]
    fn test_ordinal_impossible_date_falls_back() {
        assert_eq!(normalize_on("31st February", today()), "2026-10-19");
        assert_eq!(normalize_on("45th", today()), "2026-10-19");
    }

    #[test]
    fn test_numeric_day_first() {
        assert_eq!(normalize_on("15/03/25", today()), "2025-03-15");
        assert_eq!(normalize_on("1-8-2025", today()), "2025-08-01");
        assert_eq!(normalize_on("Order 07/11/2024 am", today()), "2024-11-07");
    }

    #[test]
    fn test_numeric_invalid_falls_back() {
        assert_eq!(normalize_on("31/02/25", today()), "2026-10-19");
        assert_eq!(normalize_on("03/15/25", today()), "2026-10-19");
    }

    #[test]
    fn test_month_then_day() {
        assert_eq!(normalize_on("July 29", today()), "2025-07-29");
        assert_eq!(normalize_on("aug 1", today()), "2025-08-01");
    }

    #[test]
    fn test_unrecognised_is_today() {
        assert_eq!(normalize_on("next week", today()), "2026-10-19");
        assert_eq!(normalize_on("TBC", today()), "2026-10-19");
    }

    #[test]
    fn test_normalize_always_canonical() {
        let out = normalize("no date here");
        assert!(NaiveDate::parse_from_str(&out, "%Y-%m-%d").is_ok());
    }
}
