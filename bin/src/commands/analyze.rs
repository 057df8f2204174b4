//! Analyze command implementation.
//!
//! Drives the full pipeline for one workbook and target code, with a
//! per-sheet progress bar, and exports the report bundle.

use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use ledgerlens_lib::prelude::*;
use std::path::{Path, PathBuf};

use crate::display::{Format, export_failed, print_diagnostics, print_outcome};

/// Run the analysis pipeline and export the report.
pub(crate) fn analyze(
    workbook: &Path,
    code: &str,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let bar = if quiet {
        None
    } else {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("[{bar:30}] {pos}/{len} {msg}")?.progress_chars("=> "),
        );
        Some(bar)
    };

    let mut observer = |_index: usize, total: usize, diagnostic: &SheetDiagnostic| {
        if let Some(bar) = &bar {
            if bar.length() == Some(0) {
                bar.set_length(total as u64);
            }
            bar.set_message(diagnostic.sheet.clone());
            bar.inc(1);
        }
    };

    let outcome = match analyze_workbook(workbook, code, &mut observer) {
        Ok(outcome) => outcome,
        Err(LedgerError::NoMatchingSheets(diagnostics)) => {
            if let Some(bar) = &bar {
                bar.finish_and_clear();
            }
            print_diagnostics(&diagnostics);
            bail!("no sheet exposed both a security-code and a trade-quantity column");
        }
        Err(LedgerError::EmptyTarget { code }) => {
            if let Some(bar) = &bar {
                bar.finish_and_clear();
            }
            eprintln!("warning: no trades found for security code {code}; nothing to analyze");
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    print_outcome(&outcome);

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "report_{}.{}",
            outcome.analysis.target_code,
            format.extension()
        ))
    });
    write_report(&outcome.report, format.into(), &path).map_err(export_failed)?;
    println!("\nReport written to {}", path.display());

    Ok(())
}
