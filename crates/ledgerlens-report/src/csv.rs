//! CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Report, ReportError};

/// Writes the report as a directory of CSV files, one per table.
///
/// The directory is created if it does not exist. Table notes are written
/// as `#`-prefixed comment lines above the header.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_csv(report: &Report, dir: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(dir)?;

    write_summary(report, &mut writer(dir, "summary")?)?;
    write_target_trades(report, &mut writer(dir, "target_trades")?)?;
    write_same_day(report, &mut writer(dir, "same_day")?)?;
    write_trend(report, &mut writer(dir, "price_trend")?)?;

    Ok(())
}

fn writer(dir: &Path, table: &str) -> Result<BufWriter<File>, ReportError> {
    let file = File::create(dir.join(format!("{table}.csv")))?;
    Ok(BufWriter::new(file))
}

fn write_summary<W: Write>(report: &Report, writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "metric,value")?;
    for (key, value) in &report.summary {
        writeln!(writer, "{},{}", escape(key), escape(value))?;
    }
    Ok(())
}

fn write_target_trades<W: Write>(report: &Report, writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "code,quantity,amount,price,date,direction")?;
    for record in &report.target_trades {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape(&record.code),
            record.quantity,
            optional_number(record.amount),
            optional_number(record.price),
            record.date.map(|d| d.to_string()).unwrap_or_default(),
            record
                .direction
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
        )?;
    }
    Ok(())
}

fn write_same_day<W: Write>(report: &Report, writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "# {}", report.same_day.note)?;
    writeln!(writer, "date,total_volume,target_volume,target_share_pct")?;
    for row in &report.same_day.rows {
        writeln!(
            writer,
            "{},{},{},{}",
            row.date, row.total_volume, row.target_volume, row.target_share_pct
        )?;
    }
    Ok(())
}

fn write_trend<W: Write>(report: &Report, writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "# {}", report.trend.note)?;
    writeln!(writer, "date,average_price")?;
    for row in &report.trend.rows {
        writeln!(writer, "{},{}", row.date, row.avg_price)?;
    }
    Ok(())
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quotes a field when it contains a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ledgerlens_analytics::{PriceTrend, SameDayAnalysis, SameDayRow};
    use ledgerlens_types::TradeRecord;

    fn make_report() -> Report {
        let mut record = TradeRecord::new("002776".to_string(), 100.0);
        record.date = NaiveDate::from_ymd_opt(2023, 5, 8);
        Report {
            summary: vec![("target code".to_string(), "002776".to_string())],
            target_trades: vec![record],
            same_day: SameDayAnalysis {
                rows: vec![SameDayRow {
                    date: NaiveDate::from_ymd_opt(2023, 5, 8).unwrap(),
                    total_volume: 300.0,
                    target_volume: 100.0,
                    target_share_pct: 33.33,
                }],
                note: "per-date share".to_string(),
            },
            trend: PriceTrend {
                rows: vec![],
                basis: None,
                note: "unavailable".to_string(),
            },
        }
    }

    #[test]
    fn test_csv_files_written() {
        let dir = tempfile::TempDir::new().unwrap();
        write_csv(&make_report(), dir.path()).unwrap();

        for name in ["summary", "target_trades", "same_day", "price_trend"] {
            assert!(dir.path().join(format!("{name}.csv")).exists());
        }

        let same_day = std::fs::read_to_string(dir.path().join("same_day.csv")).unwrap();
        assert!(same_day.starts_with("# per-date share"));
        assert!(same_day.contains("2023-05-08,300,100,33.33"));
    }

    #[test]
    fn test_optional_fields_blank() {
        let mut output = Vec::new();
        write_target_trades(&make_report(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("002776,100,,,2023-05-08,"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
