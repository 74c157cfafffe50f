//! # Variant clinical-annotation core models
//!
//! This crate holds the data models shared across varnotes:
//!
//! - `VariantId`: parsed b37 variant identifiers (`chrom-pos-ref-var`)
//! - `AnnotationRecord` / `RelationRecord`: one external clinical assertion
//! - `AnnotationBatch`: a fetched batch of per-variant annotation results
//! - `VariantAnnotationGroup`: the clinvar-rcva records of one variant

pub mod errors;
pub mod models;
pub mod utils;

pub use errors::AnnotationError;
pub use models::{
    AnnotationBatch, AnnotationRecord, RelationRecord, TraitLabel, VariantAnnotationGroup,
    VariantId, VariantResult,
};
