//! Cell-value coercion.
//!
//! Spreadsheet cells are untyped in practice: codes arrive as floats,
//! quantities as formatted strings, dates as native datetimes, serial
//! strings, or `yyyymmdd` numbers. These helpers coerce a [`Data`] cell
//! into the scalar a canonical column expects, returning `None` rather
//! than failing when a cell does not fit.

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

/// Extracts the trimmed text of a cell, if any.
///
/// Numeric cells are rendered as text so that a code column delivered as
/// floats still yields usable values. Empty and error cells yield `None`.
pub(crate) fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Coerces a cell to a number.
///
/// String cells are parsed after stripping thousands separators.
pub(crate) fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

/// Coerces a cell to a calendar date.
pub(crate) fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        Data::DateTimeIso(s) | Data::String(s) => parse_date_text(s.trim()),
        // yyyymmdd delivered as a number
        Data::Float(f) if f.fract() == 0.0 => parse_date_text(&format!("{f}")),
        Data::Int(i) => parse_date_text(&i.to_string()),
        _ => None,
    }
}

/// Date formats accepted for text cells.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%Y年%m月%d日"];

/// Datetime formats accepted for text cells; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a date from ledger text, trying the accepted formats in order.
fn parse_date_text(text: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_from_float() {
        assert_eq!(cell_text(&Data::Float(600519.0)), Some("600519".to_string()));
        assert_eq!(cell_text(&Data::Float(600519.5)), Some("600519.5".to_string()));
    }

    #[test]
    fn test_text_empty_cells() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("   ".to_string())), None);
    }

    #[test]
    fn test_number_from_string() {
        assert_eq!(cell_number(&Data::String(" 1,200 ".to_string())), Some(1200.0));
        assert_eq!(cell_number(&Data::String("abc".to_string())), None);
    }

    #[test]
    fn test_number_from_numeric_cells() {
        assert_eq!(cell_number(&Data::Int(-100)), Some(-100.0));
        assert_eq!(cell_number(&Data::Float(53.5)), Some(53.5));
        assert_eq!(cell_number(&Data::Empty), None);
    }

    #[test]
    fn test_date_text_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 8).unwrap();
        assert_eq!(parse_date_text("2023-05-08"), Some(expected));
        assert_eq!(parse_date_text("2023/05/08"), Some(expected));
        assert_eq!(parse_date_text("20230508"), Some(expected));
        assert_eq!(parse_date_text("2023年05月08日"), Some(expected));
        assert_eq!(parse_date_text("2023-05-08 10:30:00"), Some(expected));
        assert_eq!(parse_date_text("sometime"), None);
    }

    #[test]
    fn test_date_from_numeric_yyyymmdd() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 8).unwrap();
        assert_eq!(cell_date(&Data::Int(20230508)), Some(expected));
        assert_eq!(cell_date(&Data::Float(20230508.0)), Some(expected));
        assert_eq!(cell_date(&Data::Float(0.5)), None);
    }
}
