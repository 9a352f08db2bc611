//! Permissive "does this look like a calendar date" detection.
//!
//! The classifier needs a lenient plausibility test, not a strict parser:
//! it only ever compares the *ratio* of date-like values in a column against
//! a threshold. The accepted shapes below are an explicit substitute for the
//! loosely specified platform date parsers other implementations lean on,
//! so classification is reproducible here even if it cannot be guaranteed
//! identical across ecosystems.
//!
//! Accepted shapes (`%B` parses abbreviated and full month names alike):
//! - RFC 3339 timestamps (`2025-01-01T00:00:00Z`, with offsets/fractions)
//! - `%Y-%m-%dT%H:%M:%S` / `%Y-%m-%d %H:%M:%S` (optional fractions)
//! - `%Y-%m-%dT%H:%M`
//! - `%Y-%m-%d`, `%Y/%m/%d`, `%m/%d/%Y`
//! - `%d %B %Y` ("5 Jan 2024", "5 January 2024"), `%B %d, %Y` ("Jan 5, 2024",
//!   "January 5, 2024")
//! - `%Y-%m` month precision ("2024-01")
//!
//! Bare numbers are deliberately not dates; the classifier's priority order
//! handles numeric columns before date detection matters.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// True when `text` plausibly denotes a calendar date or timestamp.
pub(crate) fn looks_like_date(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    if DateTime::parse_from_rfc3339(text).is_ok() {
        return true;
    }
    if DATETIME_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok())
    {
        return true;
    }
    if DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(text, format).is_ok())
    {
        return true;
    }
    is_year_month(text)
}

/// `YYYY-MM` month precision; chrono's `NaiveDate` insists on a day
/// component, so complete it with the first of the month.
fn is_year_month(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::looks_like_date;

    #[test]
    fn accepts_common_date_shapes() {
        for text in [
            "2024-01-01",
            "2024/01/01",
            "01/31/2024",
            "2024-01-01T12:30:00",
            "2024-01-01T12:30:00.250",
            "2024-01-01 12:30:00",
            "2024-01-01T12:30",
            "2025-06-01T00:00:00Z",
            "2025-06-01T00:00:00+02:00",
            "5 Jan 2024",
            "5 January 2024",
            "Jan 5, 2024",
            "January 5, 2024",
            "2024-01",
            "  2024-01-01  ",
        ] {
            assert!(looks_like_date(text), "expected date-like: {text:?}");
        }
    }

    #[test]
    fn rejects_non_dates() {
        for text in [
            "", "red", "3", "3.5", "-12", "1e5", "2024", "13/45/2024", "2024-13", "N/A",
        ] {
            assert!(!looks_like_date(text), "expected not date-like: {text:?}");
        }
    }
}
