//! # Clinical-annotation merge engine
//!
//! This crate turns grouped clinical annotation records into merged
//! per-variant summaries. It provides:
//!
//! - Evidence link heuristics (frameshift/substitution nomenclature)
//! - Name and frequency merging with order-preserving de-duplication
//! - Per-record detail rows with a curation-notes fallback
//! - The batch pipeline producing renderable per-variant reports

pub mod evidence;
pub mod merge;
pub mod report;

pub use evidence::{evidence_url, guess_evidence_id};
pub use merge::{detail_rows, merge, DetailRow, MergedSummary};
pub use report::{annotate_batch, report_group, VariantReport};
