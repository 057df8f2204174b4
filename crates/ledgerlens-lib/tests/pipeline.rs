//! Full pipeline integration: workbook in, analysis and report out.

use ledgerlens_lib::prelude::*;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Two accounts trading the target plus another security on the same day,
/// with amount and direction columns available.
fn write_fixture(path: &std::path::Path) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("普通账户").unwrap();
    let headers = ["证券代码", "成交数量", "成交金额", "交易日期", "买卖方向"];
    for (col, h) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *h).unwrap();
    }
    let rows: &[(&str, f64, f64, &str, &str)] = &[
        ("2776", 100.0, 5000.0, "2023-05-08", "买入"),
        ("2776", 50.0, 3000.0, "2023-05-08", "买入"),
        ("000001", 200.0, 2000.0, "2023-05-08", "买入"),
        ("2776", -80.0, 4200.0, "2023-05-09", "卖出"),
    ];
    for (i, (code, qty, amount, date, side)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *code).unwrap();
        sheet.write_number(row, 1, *qty).unwrap();
        sheet.write_number(row, 2, *amount).unwrap();
        sheet.write_string(row, 3, *date).unwrap();
        sheet.write_string(row, 4, *side).unwrap();
    }

    workbook.save(path).unwrap();
}

#[test]
fn test_full_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.xlsx");
    write_fixture(&path);

    // Target supplied in raw form; the pipeline normalizes it.
    let outcome = analyze_workbook(&path, " 2776 ", &mut NullObserver).unwrap();

    assert_eq!(outcome.analysis.target_code, "002776");
    assert_eq!(outcome.analysis.total_records, 4);
    assert_eq!(outcome.analysis.target_records, 3);
    assert!((outcome.analysis.total_volume - 430.0).abs() < 1e-9);
    assert!((outcome.analysis.target_volume - 230.0).abs() < 1e-9);

    // 2023-05-08 is mixed (another code traded), 2023-05-09 is single.
    assert_eq!(outcome.analysis.days.mixed_days, 1);
    assert_eq!(outcome.analysis.days.single_days, 1);

    // Buy-side restriction applies: (5000 + 3000) / (100 + 50).
    let trend = &outcome.analysis.trend;
    assert_eq!(trend.rows.len(), 1);
    assert!((trend.rows[0].avg_price - 8000.0 / 150.0).abs() < 1e-9);
    assert!(trend.note.contains("buy-side"));

    // Report carries the summary and target detail.
    assert_eq!(outcome.report.summary_value("target records"), Some("3"));
    assert_eq!(outcome.report.target_trades.len(), 3);

    // Export the bundle and make sure it lands on disk.
    let out = dir.path().join("report.xlsx");
    write_report(&outcome.report, ReportFormat::Xlsx, &out).unwrap();
    assert!(out.exists());
}

#[test]
fn test_invalid_target_code_rejected_before_io() {
    // The path does not exist; the target check must fire first.
    let missing = std::path::Path::new("/nonexistent/ledger.xlsx");
    match analyze_workbook(missing, "   ", &mut NullObserver) {
        Err(LedgerError::InvalidTargetCode) => {}
        other => panic!("expected InvalidTargetCode, got {other:?}"),
    }
}

#[test]
fn test_empty_target_stops_before_analytics() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.xlsx");
    write_fixture(&path);

    match analyze_workbook(&path, "999999", &mut NullObserver) {
        Err(LedgerError::EmptyTarget { code }) => assert_eq!(code, "999999"),
        other => panic!("expected EmptyTarget, got {other:?}"),
    }
}
