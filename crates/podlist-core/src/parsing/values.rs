/// Parse the leading integer of a cell, the way spreadsheet exports are
/// usually read: leading whitespace and an optional sign are accepted, then
/// digits up to the first non-digit ("12a" -> 12, "10.7" -> 10).
///
/// Returns None when there are no leading digits.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Saturate rather than fail on absurdly long digit runs.
    let value = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Parse the longest leading decimal number of a cell ("2.5kg" -> 2.5).
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            d if d.is_ascii_digit() => seen_digit = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// Coerce a quantity cell to a whole number of items.
///
/// Integer parse first; if that yields nothing or zero, a decimal parse;
/// otherwise zero. Fractions are truncated, except that a positive amount
/// below one item counts as one. Negative input comes back as None.
pub fn coerce_quantity(s: &str) -> Option<u32> {
    let value = match parse_leading_int(s) {
        Some(n) if n != 0 => n as f64,
        _ => parse_leading_float(s).unwrap_or(0.0),
    };

    if value < 0.0 || value.is_nan() {
        return None;
    }
    if value > 0.0 && value < 1.0 {
        return Some(1);
    }
    Some(value.trunc().min(u32::MAX as f64) as u32)
}
