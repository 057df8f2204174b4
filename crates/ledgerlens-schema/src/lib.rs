//! Schema resolution for heterogeneous trade-ledger exports.
//!
//! Brokerage exports disagree on almost everything: column names, header-row
//! placement, and how security codes are written. This crate provides the
//! two normalization primitives the ingestion pipeline is built on:
//!
//! - [`normalize_code`] - Canonicalizes a raw security-code value
//! - [`resolve_columns`] - Maps observed column names onto the canonical
//!   vocabulary via a fixed synonym table
//!
//! Resolution is a pure lookup: names are matched by exact equality after
//! whitespace stripping and case folding, never fuzzily.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod code;
mod synonyms;

pub use code::normalize_code;
pub use synonyms::{SchemaMap, canonical_of, resolve_columns, synonym_table};
