//! Optional per-sheet progress notifications.

use ledgerlens_types::SheetDiagnostic;

/// Observer invoked once per sheet as ingestion progresses.
///
/// Purely informational: the pipeline never depends on an observer being
/// present, and the notification carries no synchronization semantics.
/// Interactive frontends can use the per-sheet call as their natural
/// cancellation checkpoint.
pub trait SheetObserver {
    /// Called after each sheet is processed.
    ///
    /// `index` is the zero-based position of the sheet, `total` the number
    /// of sheets in the workbook.
    fn on_sheet(&mut self, index: usize, total: usize, diagnostic: &SheetDiagnostic);
}

/// Observer that ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SheetObserver for NullObserver {
    fn on_sheet(&mut self, _index: usize, _total: usize, _diagnostic: &SheetDiagnostic) {}
}

impl<F> SheetObserver for F
where
    F: FnMut(usize, usize, &SheetDiagnostic),
{
    fn on_sheet(&mut self, index: usize, total: usize, diagnostic: &SheetDiagnostic) {
        self(index, total, diagnostic);
    }
}
