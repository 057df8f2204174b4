//! Columns command implementation.
//!
//! This module lists the synonym table so users can see which header
//! spellings the ingester will recognize.

use anyhow::Result;
use ledgerlens_lib::synonym_table;

/// List the canonical columns and their accepted header variants.
pub(crate) fn list_columns() -> Result<()> {
    println!("{:<16} ACCEPTED HEADER VARIANTS", "CANONICAL");
    println!("{}", "-".repeat(70));

    for (column, variants) in synonym_table() {
        println!("{:<16} {}", column.name(), variants.join(", "));
    }

    println!("\nMatching strips whitespace and is case-insensitive; no fuzzy matching.");
    Ok(())
}
