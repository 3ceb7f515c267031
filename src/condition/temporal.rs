// SPDX-License-Identifier: MIT

//! Numeric and calendar parsing for ordering comparisons

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a string as a number.
///
/// Blank input is zero. Accepts decimal and exponent notation, `0x`/`0o`/`0b`
/// integer prefixes and `Infinity`; anything else is NaN.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust accepts spellings such as "inf" and "nan" that are not numbers here
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse a calendar date or timestamp into epoch milliseconds.
///
/// Forms without an offset are read as UTC.
pub fn parse_date(s: &str) -> Option<f64> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis() as f64);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis() as f64);
        }
    }

    None
}

/// Number if the string is numeric, otherwise a timestamp, otherwise NaN
pub fn parse_date_or_number(s: &str) -> f64 {
    let number = parse_number(s);
    if !number.is_nan() {
        return number;
    }
    parse_date(s).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10"), 10.0);
        assert_eq!(parse_number("  -2.5 "), -2.5);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("12px").is_nan());
    }

    #[test]
    fn test_parse_date_forms() {
        let day = parse_date("2024-03-01").unwrap();
        assert_eq!(parse_date("2024/03/01"), Some(day));
        assert_eq!(parse_date("03/01/2024"), Some(day));
        assert_eq!(parse_date("2024-03-01T00:00:00Z"), Some(day));
        assert_eq!(parse_date("2024-03-01 00:00"), Some(day));
        assert_eq!(
            parse_date("2024-03-01T01:00:00+01:00"),
            Some(day),
            "offsets are honoured"
        );
        assert_eq!(
            parse_date("Fri, 01 Mar 2024 00:00:00 +0000"),
            Some(day)
        );
        assert_eq!(parse_date("2024-03-01T12:30:00.5").unwrap(), day + 45_000_500.0);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-45"), None);
    }

    #[test]
    fn test_parse_date_or_number() {
        assert_eq!(parse_date_or_number("42"), 42.0);
        assert_eq!(parse_date_or_number("1970-01-02"), 86_400_000.0);
        assert!(parse_date_or_number("soon").is_nan());
    }
}
