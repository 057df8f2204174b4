//! Per-sheet header hunting and record extraction.

use std::collections::BTreeSet;

use calamine::{Data, Range};
use ledgerlens_schema::{normalize_code, resolve_columns};
use ledgerlens_types::{Column, Direction, SheetDiagnostic, SheetOutcome, TradeRecord};

use crate::cell::{cell_date, cell_number, cell_text};

/// Number of header offsets tried per sheet (rows 0..=4).
///
/// Brokerage exports often stack a title and account banner above the real
/// header; in practice the header is never deeper than a handful of rows.
pub const HEADER_SEARCH_DEPTH: usize = 5;

/// Records and schema extracted from one matched sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetBatch {
    /// Canonical records, in row order.
    pub records: Vec<TradeRecord>,
    /// Canonical columns that resolved on this sheet.
    pub columns: BTreeSet<Column>,
    /// Zero-based row index where the header was found.
    pub header_row: usize,
    /// Observed names dropped as duplicate synonym hits.
    pub duplicates: Vec<String>,
}

/// Ingests one raw sheet, hunting for the header row.
///
/// Offsets `0..=4` are tried in increasing order; the first row that
/// resolves both a security-code and a trade-quantity column wins and the
/// remaining offsets are not attempted. A failed attempt (offset beyond
/// the sheet, required columns absent) is not an error, just the next
/// iteration.
///
/// Always returns a diagnostic; the batch is `None` when no offset
/// matched.
#[must_use]
pub fn ingest_sheet(name: &str, range: &Range<Data>) -> (Option<SheetBatch>, SheetDiagnostic) {
    let rows: Vec<&[Data]> = range.rows().collect();

    for offset in 0..HEADER_SEARCH_DEPTH {
        if let Some(batch) = try_header_offset(&rows, offset) {
            let outcome = SheetOutcome::Matched {
                header_row: batch.header_row,
                rows: batch.records.len(),
                duplicate_columns: batch.duplicates.clone(),
            };
            return (Some(batch), SheetDiagnostic::new(name.to_string(), outcome));
        }
    }

    // Nothing matched: report whatever was visible on the first row so the
    // caller can see what the sheet actually contained.
    let outcome = rows.first().map_or_else(
        || SheetOutcome::Unreadable {
            error: "sheet contains no rows".to_string(),
        },
        |header| SheetOutcome::Unmatched {
            observed: header.iter().filter_map(cell_text).collect(),
        },
    );
    (None, SheetDiagnostic::new(name.to_string(), outcome))
}

/// Attempts one header offset.
///
/// Returns `None` when the offset is out of range or the row does not
/// resolve both required columns.
fn try_header_offset(rows: &[&[Data]], offset: usize) -> Option<SheetBatch> {
    let header = rows.get(offset)?;
    let observed: Vec<String> = header
        .iter()
        .map(|c| cell_text(c).unwrap_or_default())
        .collect();

    let schema = resolve_columns(&observed);
    let code_index = schema.index_of(Column::Code)?;
    let quantity_index = schema.index_of(Column::Quantity)?;

    let mut records = Vec::new();
    for row in &rows[offset + 1..] {
        // Rows without a usable security code are dropped.
        let Some(raw_code) = row.get(code_index).and_then(cell_text) else {
            continue;
        };
        let code = normalize_code(&raw_code);
        if code.is_empty() {
            continue;
        }

        // Quantity cells that fail coercion become 0 rather than dropping
        // the row, matching the historical report behavior.
        let quantity = row.get(quantity_index).and_then(cell_number).unwrap_or(0.0);
        let mut record = TradeRecord::new(code, quantity);

        if let Some(index) = schema.index_of(Column::Amount) {
            record.amount = row.get(index).and_then(cell_number);
        }
        if let Some(index) = schema.index_of(Column::Price) {
            record.price = row.get(index).and_then(cell_number);
        }
        if let Some(index) = schema.index_of(Column::Date) {
            record.date = row.get(index).and_then(cell_date);
        }
        if let Some(index) = schema.index_of(Column::Direction) {
            record.direction = row
                .get(index)
                .and_then(cell_text)
                .map(|text| Direction::parse(&text));
        }

        records.push(record);
    }

    Some(SheetBatch {
        records,
        columns: schema.resolved().collect(),
        header_row: offset,
        duplicates: schema.duplicates().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    fn range_of(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height.saturating_sub(1), width.saturating_sub(1)));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    #[test]
    fn test_header_at_row_zero() {
        let range = range_of(vec![
            vec![s("证券代码"), s("成交数量"), s("交易日期")],
            vec![s("2776"), Data::Float(100.0), s("2023-05-08")],
        ]);
        let (batch, diagnostic) = ingest_sheet("Sheet1", &range);

        let batch = batch.expect("should match");
        assert_eq!(batch.header_row, 0);
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].code, "002776");
        assert_eq!(
            batch.records[0].date,
            NaiveDate::from_ymd_opt(2023, 5, 8)
        );
        assert!(diagnostic.is_matched());
    }

    #[test]
    fn test_header_hunted_past_junk_rows() {
        // Real header on row index 2, under a title and a banner row that
        // must not be mistaken for headers.
        let range = range_of(vec![
            vec![s("对账单"), Data::Empty],
            vec![s("账户: 123456"), Data::Empty],
            vec![s("证券代码"), s("成交数量")],
            vec![s("600519.0"), Data::Float(-50.0)],
        ]);
        let (batch, _) = ingest_sheet("流水", &range);

        let batch = batch.expect("should match at offset 2");
        assert_eq!(batch.header_row, 2);
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].code, "600519");
        assert!((batch.records[0].quantity + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_match_yields_unmatched_diagnostic() {
        let range = range_of(vec![
            vec![s("备注"), s("手续费")],
            vec![s("x"), Data::Float(1.0)],
        ]);
        let (batch, diagnostic) = ingest_sheet("Notes", &range);

        assert!(batch.is_none());
        match diagnostic.outcome {
            SheetOutcome::Unmatched { observed } => {
                assert_eq!(observed, vec!["备注".to_string(), "手续费".to_string()]);
            }
            other => panic!("expected unmatched, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sheet_is_unreadable() {
        let range = Range::empty();
        let (batch, diagnostic) = ingest_sheet("Empty", &range);

        assert!(batch.is_none());
        assert!(matches!(
            diagnostic.outcome,
            SheetOutcome::Unreadable { .. }
        ));
    }

    #[test]
    fn test_rows_without_code_dropped() {
        let range = range_of(vec![
            vec![s("证券代码"), s("成交数量")],
            vec![Data::Empty, Data::Float(100.0)],
            vec![s("2776"), Data::Float(200.0)],
        ]);
        let (batch, _) = ingest_sheet("Sheet1", &range);
        assert_eq!(batch.unwrap().records.len(), 1);
    }

    #[test]
    fn test_unparsable_quantity_coerced_to_zero() {
        let range = range_of(vec![
            vec![s("证券代码"), s("成交数量")],
            vec![s("2776"), s("n/a")],
        ]);
        let (batch, _) = ingest_sheet("Sheet1", &range);
        let batch = batch.unwrap();
        assert!((batch.records[0].quantity).abs() < f64::EPSILON);
    }

    #[test]
    fn test_optional_columns_populated() {
        let range = range_of(vec![
            vec![
                s("证券代码"),
                s("成交数量"),
                s("成交金额"),
                s("成交价格"),
                s("买卖方向"),
            ],
            vec![
                s("2776"),
                Data::Float(100.0),
                Data::Float(5000.0),
                Data::Float(50.0),
                s("买入"),
            ],
        ]);
        let (batch, _) = ingest_sheet("Sheet1", &range);
        let record = &batch.unwrap().records[0];

        assert_eq!(record.amount, Some(5000.0));
        assert_eq!(record.price, Some(50.0));
        assert_eq!(record.direction, Some(Direction::Buy));
    }

    #[test]
    fn test_duplicate_columns_reported() {
        let range = range_of(vec![
            vec![s("证券代码"), s("成交数量"), s("成交量")],
            vec![s("2776"), Data::Float(100.0), Data::Float(999.0)],
        ]);
        let (batch, diagnostic) = ingest_sheet("Sheet1", &range);

        let batch = batch.unwrap();
        assert_eq!(batch.duplicates, vec!["成交量".to_string()]);
        // First-bound column is the one that feeds the record.
        assert!((batch.records[0].quantity - 100.0).abs() < f64::EPSILON);
        match diagnostic.outcome {
            SheetOutcome::Matched {
                duplicate_columns, ..
            } => assert_eq!(duplicate_columns.len(), 1),
            other => panic!("expected matched, got {other:?}"),
        }
    }
}
