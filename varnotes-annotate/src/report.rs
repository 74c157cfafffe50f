//! Batch-level annotation pipeline.
//!
//! Groups a fetched batch by variant, merges each group, and produces
//! the three renderable payloads per variant (identity, frequency,
//! detail rows). Variants with no clinvar-rcva records are suppressed;
//! everything else degrades to sentinel values rather than failing.

use log::{debug, info};

use varnotes_core::models::{AnnotationBatch, VariantAnnotationGroup};

use crate::merge::{detail_rows, merge, DetailRow, MergedSummary};

///
/// IdentityFields struct, the identity payload of one variant: the
/// merged names, a display label for the variant itself, and the
/// resolved evidence-service link.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityFields {
    pub names: Vec<String>,
    /// Formatted variant id (`"Chr1: 100 A > T"`), or the raw b37
    /// identifier when it could not be parsed.
    pub variant_label: String,
    pub evidence_url: String,
}

///
/// FrequencyFields struct, the frequency payload of one variant.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyFields {
    pub frequency: String,
    /// ExAC cross-reference URL, empty when the identifier was
    /// unparseable (the key needs the parsed, remapped chromosome).
    pub cross_ref_url: String,
}

///
/// VariantReport struct, the merged output for one variant: three
/// independently renderable payloads handed to the rendering layer.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantReport {
    pub b37_id: String,
    pub identity: IdentityFields,
    pub frequency: FrequencyFields,
    pub details: Vec<DetailRow>,
}

impl VariantReport {
    ///
    /// Get the plain display string of the merged names.
    ///
    pub fn display_name(&self) -> String {
        self.identity.names.join(crate::merge::NAME_SEPARATOR)
    }

    ///
    /// Get the legacy inline-markup display string of the merged names.
    ///
    pub fn display_name_markup(&self) -> String {
        self.identity.names.join(crate::merge::NAME_SEPARATOR_MARKUP)
    }
}

///
/// Build the [VariantReport] for one annotation group.
///
pub fn report_group(group: &VariantAnnotationGroup) -> VariantReport {
    let MergedSummary {
        names,
        frequency,
        evidence_url,
    } = merge(group);

    let variant_label = match &group.variant {
        Some(variant) => variant.as_string(),
        None => group.b37_id.clone(),
    };
    let cross_ref_url = match &group.variant {
        Some(variant) => variant.exac_url(),
        None => String::new(),
    };

    VariantReport {
        b37_id: group.b37_id.clone(),
        identity: IdentityFields {
            names,
            variant_label,
            evidence_url,
        },
        frequency: FrequencyFields {
            frequency,
            cross_ref_url,
        },
        details: detail_rows(group),
    }
}

///
/// Annotate a whole fetched batch: one [VariantReport] per variant
/// that has at least one clinvar-rcva record, in input order.
///
pub fn annotate_batch(batch: &AnnotationBatch) -> Vec<VariantReport> {
    let reports: Vec<VariantReport> = batch
        .results
        .iter()
        .filter_map(VariantAnnotationGroup::from_result)
        .map(|group| report_group(&group))
        .collect();

    let suppressed = batch.results.len() - reports.len();
    if suppressed > 0 {
        debug!("Suppressed {} variants with no clinvar-rcva records", suppressed);
    }
    info!(
        "Annotated {} of {} variants in batch",
        reports.len(),
        batch.results.len()
    );

    reports
}
