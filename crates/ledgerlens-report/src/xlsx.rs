//! Workbook export.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::{Report, ReportError};

/// Writes the report as a workbook with four named sheets.
///
/// # Errors
///
/// Returns an error if the workbook cannot be built or saved.
pub fn write_xlsx(report: &Report, path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    write_summary(workbook.add_worksheet(), report, &header)?;
    write_target_trades(workbook.add_worksheet(), report, &header)?;
    write_same_day(workbook.add_worksheet(), report, &header)?;
    write_trend(workbook.add_worksheet(), report, &header)?;

    workbook.save(path)?;
    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    report: &Report,
    header: &Format,
) -> Result<(), ReportError> {
    sheet.set_name(Report::SHEET_SUMMARY)?;
    sheet.write_string_with_format(0, 0, "metric", header)?;
    sheet.write_string_with_format(0, 1, "value", header)?;
    for (i, (key, value)) in report.summary.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, key)?;
        sheet.write_string(row, 1, value)?;
    }
    Ok(())
}

fn write_target_trades(
    sheet: &mut Worksheet,
    report: &Report,
    header: &Format,
) -> Result<(), ReportError> {
    sheet.set_name(Report::SHEET_TARGET_TRADES)?;
    for (col, title) in ["code", "quantity", "amount", "price", "date", "direction"]
        .iter()
        .enumerate()
    {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }
    for (i, record) in report.target_trades.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &record.code)?;
        sheet.write_number(row, 1, record.quantity)?;
        if let Some(amount) = record.amount {
            sheet.write_number(row, 2, amount)?;
        }
        if let Some(price) = record.price {
            sheet.write_number(row, 3, price)?;
        }
        if let Some(date) = record.date {
            sheet.write_string(row, 4, date.to_string())?;
        }
        if let Some(direction) = record.direction {
            sheet.write_string(row, 5, direction.as_str())?;
        }
    }
    Ok(())
}

fn write_same_day(
    sheet: &mut Worksheet,
    report: &Report,
    header: &Format,
) -> Result<(), ReportError> {
    sheet.set_name(Report::SHEET_SAME_DAY)?;
    for (col, title) in ["date", "total volume", "target volume", "target share %"]
        .iter()
        .enumerate()
    {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }
    for (i, row_data) in report.same_day.rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, row_data.date.to_string())?;
        sheet.write_number(row, 1, row_data.total_volume)?;
        sheet.write_number(row, 2, row_data.target_volume)?;
        sheet.write_number(row, 3, row_data.target_share_pct)?;
    }
    let note_row = report.same_day.rows.len() as u32 + 2;
    sheet.write_string(note_row, 0, format!("note: {}", report.same_day.note))?;
    Ok(())
}

fn write_trend(
    sheet: &mut Worksheet,
    report: &Report,
    header: &Format,
) -> Result<(), ReportError> {
    sheet.set_name(Report::SHEET_TREND)?;
    sheet.write_string_with_format(0, 0, "date", header)?;
    sheet.write_string_with_format(0, 1, "average price", header)?;
    for (i, row_data) in report.trend.rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, row_data.date.to_string())?;
        sheet.write_number(row, 1, row_data.avg_price)?;
    }
    let note_row = report.trend.rows.len() as u32 + 2;
    sheet.write_string(note_row, 0, format!("note: {}", report.trend.note))?;
    Ok(())
}
