//! # Flat-file export for varnotes
//!
//! Serializes merged per-variant reports into the downloadable CSV
//! format: every field double-quoted, comma-joined, newline-terminated
//! rows, identity/frequency fields repeated on each detail row.

pub mod csv;

pub use csv::{batch_csv, download_filename, group_csv, CsvWrite};
