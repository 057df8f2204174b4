//! Workbook export verified by re-opening the written file.

use calamine::{Reader, open_workbook_auto};
use chrono::NaiveDate;
use ledgerlens_analytics::{PriceTrend, SameDayAnalysis, SameDayRow, TrendBasis, TrendRow};
use ledgerlens_report::{Report, ReportFormat, write_report};
use ledgerlens_types::TradeRecord;
use tempfile::TempDir;

fn make_report() -> Report {
    let date = NaiveDate::from_ymd_opt(2023, 5, 8).unwrap();
    let mut record = TradeRecord::new("002776".to_string(), 100.0);
    record.date = Some(date);
    record.amount = Some(5000.0);

    Report {
        summary: vec![
            ("target code".to_string(), "002776".to_string()),
            ("volume share %".to_string(), "33.33".to_string()),
        ],
        target_trades: vec![record],
        same_day: SameDayAnalysis {
            rows: vec![SameDayRow {
                date,
                total_volume: 300.0,
                target_volume: 100.0,
                target_share_pct: 33.33,
            }],
            note: "per-date share of account volume".to_string(),
        },
        trend: PriceTrend {
            rows: vec![TrendRow {
                date,
                avg_price: 50.0,
            }],
            basis: Some(TrendBasis::AmountWeighted),
            note: "volume-weighted average price".to_string(),
        },
    }
}

#[test]
fn test_xlsx_export_has_four_named_sheets() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.xlsx");
    write_report(&make_report(), ReportFormat::Xlsx, &path).unwrap();

    let workbook = open_workbook_auto(&path).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec![
            Report::SHEET_SUMMARY.to_string(),
            Report::SHEET_TARGET_TRADES.to_string(),
            Report::SHEET_SAME_DAY.to_string(),
            Report::SHEET_TREND.to_string(),
        ]
    );
}

#[test]
fn test_xlsx_summary_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.xlsx");
    write_report(&make_report(), ReportFormat::Xlsx, &path).unwrap();

    let mut workbook = open_workbook_auto(&path).unwrap();
    let range = workbook.worksheet_range(Report::SHEET_SUMMARY).unwrap();
    let cells: Vec<String> = range
        .rows()
        .flat_map(|row| row.iter().map(std::string::ToString::to_string))
        .collect();

    assert!(cells.contains(&"target code".to_string()));
    assert!(cells.contains(&"002776".to_string()));
    assert!(cells.contains(&"33.33".to_string()));
}

#[test]
fn test_json_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    write_report(&make_report(), ReportFormat::Json, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: Report = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.summary.len(), 2);
    assert_eq!(parsed.trend.rows.len(), 1);
}

#[test]
fn test_csv_export_directory() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report");
    write_report(&make_report(), ReportFormat::Csv, &out).unwrap();

    let trend = std::fs::read_to_string(out.join("price_trend.csv")).unwrap();
    assert!(trend.contains("2023-05-08,50"));
}
