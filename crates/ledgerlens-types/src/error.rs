//! Error types for ledgerlens.

use thiserror::Error;

use crate::SheetDiagnostic;

/// Result type alias for ledgerlens operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while ingesting and analyzing a trade ledger.
///
/// Sheet-local failures never appear here: a failed header-offset attempt
/// advances to the next offset and an unreadable sheet becomes a
/// [`SheetDiagnostic`]. Only dataset-level conditions are terminal.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The target security code normalized to an empty string.
    #[error("Target security code is empty after normalization")]
    InvalidTargetCode,

    /// The input could not be opened as a spreadsheet workbook.
    #[error("Could not open workbook: {0}")]
    UnreadableWorkbook(String),

    /// Every sheet failed to resolve the required columns.
    ///
    /// Carries one diagnostic per sheet, in document order, so the caller
    /// can render a full report of why nothing matched.
    #[error("No sheet exposed both a security-code and a trade-quantity column")]
    NoMatchingSheets(Vec<SheetDiagnostic>),

    /// The target code matched zero records after the merge.
    #[error("No trades found for security code {code}")]
    EmptyTarget {
        /// The normalized target code that matched nothing.
        code: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SheetOutcome;

    #[test]
    fn test_no_matching_sheets_carries_diagnostics() {
        let diags = vec![SheetDiagnostic::new(
            "Sheet1".to_string(),
            SheetOutcome::Unmatched { observed: vec![] },
        )];
        let err = LedgerError::NoMatchingSheets(diags);
        match err {
            LedgerError::NoMatchingSheets(d) => assert_eq!(d.len(), 1),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_display() {
        let err = LedgerError::EmptyTarget {
            code: "002776".to_string(),
        };
        assert_eq!(err.to_string(), "No trades found for security code 002776");
    }
}
