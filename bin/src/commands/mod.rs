//! Command implementations for the ledgerlens CLI.

pub(crate) mod analyze;
pub(crate) mod columns;
