//! JSON export.

use std::io::Write;

use crate::{Report, ReportError};

/// Writes the report as a single pretty-printed JSON document.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(report: &Report, mut writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerlens_analytics::{PriceTrend, SameDayAnalysis};
    use std::io::Cursor;

    #[test]
    fn test_json_round_trip() {
        let report = Report {
            summary: vec![("target code".to_string(), "002776".to_string())],
            target_trades: vec![],
            same_day: SameDayAnalysis {
                rows: vec![],
                note: "skipped".to_string(),
            },
            trend: PriceTrend {
                rows: vec![],
                basis: None,
                note: "unavailable".to_string(),
            },
        };

        let mut output = Cursor::new(Vec::new());
        write_json(&report, &mut output).unwrap();

        let parsed: Report = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(parsed, report);
    }
}
