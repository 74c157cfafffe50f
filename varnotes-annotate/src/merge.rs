//! Per-group merging of clinical annotation records.
//!
//! One variant's records are collapsed into a single summary (distinct
//! names, one representative frequency, one evidence link) plus one
//! detail row per record. Everything here is pure: the same group
//! always merges to the same output.

use varnotes_core::models::record::AnnotationRecord;
use varnotes_core::models::{TraitLabel, VariantAnnotationGroup};

use crate::evidence::evidence_url;

/// Sentinel frequency when no record in a group carries one.
pub const UNKNOWN_FREQUENCY: &str = "Unknown";

/// Marker for records with none of the optional curation fields.
pub const NO_CURATION_NOTES: &str = "No curation notes available";

/// Separator for the plain multi-name display string.
pub const NAME_SEPARATOR: &str = " or ";

/// Legacy inline-markup separator used by the HTML report table.
pub const NAME_SEPARATOR_MARKUP: &str = "</b><br><small>or</small><br><b>";

///
/// MergedSummary struct, the collapsed identity of one variant's
/// annotation group. Recomputed on every merge, never cached.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSummary {
    /// Distinct preferred names, first-seen order.
    pub names: Vec<String>,
    /// Chosen representative allele frequency, or [UNKNOWN_FREQUENCY].
    pub frequency: String,
    /// Resolved evidence-service link, empty when none was derivable.
    pub evidence_url: String,
}

impl MergedSummary {
    ///
    /// Get the display string of the merged names, joined by the
    /// plain `" or "` separator.
    ///
    pub fn display_name(&self) -> String {
        self.names.join(NAME_SEPARATOR)
    }

    ///
    /// Get the legacy inline-markup rendition of the merged names,
    /// kept as an optional formatting mode for the HTML report table.
    ///
    pub fn display_name_markup(&self) -> String {
        self.names.join(NAME_SEPARATOR_MARKUP)
    }
}

///
/// DetailRow struct, one record's renderable detail fields.
/// Generated for rendering/export, discarded afterwards.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub trait_label: TraitLabel,
    pub accession: String,
    pub trait_name: String,
    pub significance: String,
    pub curation: String,
}

///
/// Get the distinct preferred names of a group, in first-seen order.
/// Empty and missing names are skipped; duplicates compare by exact
/// string equality.
///
pub fn merged_names(group: &VariantAnnotationGroup) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in &group.records {
        let Some(name) = record.preferred_name() else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        if names.iter().any(|seen| seen == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

///
/// Choose the representative allele frequency of a group: distinct
/// values in record order, first available wins. Not an average and
/// not a max; the first-wins policy is deliberate.
///
pub fn merged_frequency(group: &VariantAnnotationGroup) -> String {
    let mut frequencies: Vec<&str> = Vec::new();
    for record in &group.records {
        let Some(freq) = record.allele_frequency() else {
            continue;
        };
        if frequencies.contains(&freq) {
            continue;
        }
        frequencies.push(freq);
    }

    match frequencies.first() {
        Some(freq) => (*freq).to_string(),
        None => UNKNOWN_FREQUENCY.to_string(),
    }
}

fn curation_text(record: &AnnotationRecord) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(inheritance) = record.inheritance() {
        parts.push(format!("Inheritance: {}", inheritance));
    }
    if let Some(evidence) = record.evidence() {
        parts.push(format!("Evidence: {}", evidence));
    }
    if let Some(notes) = record.notes() {
        parts.push(format!("Notes: {}", notes));
    }

    if parts.is_empty() {
        NO_CURATION_NOTES.to_string()
    } else {
        parts.join("; ")
    }
}

///
/// Merge a group into its [MergedSummary]. The evidence link is
/// derived from the first record's preferred name.
///
pub fn merge(group: &VariantAnnotationGroup) -> MergedSummary {
    let evidence_url = evidence_url(group.first_record().preferred_name().unwrap_or_default());

    MergedSummary {
        names: merged_names(group),
        frequency: merged_frequency(group),
        evidence_url,
    }
}

///
/// Get one [DetailRow] per record of the group, in input order.
/// Missing detail fields degrade to empty strings; a record with no
/// curation fields at all carries the [NO_CURATION_NOTES] marker.
///
pub fn detail_rows(group: &VariantAnnotationGroup) -> Vec<DetailRow> {
    group
        .records
        .iter()
        .map(|record| DetailRow {
            trait_label: record.trait_label(),
            accession: record.accession().unwrap_or_default().to_string(),
            trait_name: record.trait_name().unwrap_or_default().to_string(),
            significance: record.significance().unwrap_or_default().to_string(),
            curation: curation_text(record),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use varnotes_core::models::record::{
        TAG_ACCESSION, TAG_ESP_FREQUENCY, TAG_EXAC_FREQUENCY, TAG_INHERITANCE, TAG_NOTES,
        TAG_PREFERRED_NAME, TAG_SIGNIFICANCE, TAG_TRAIT_NAME, TAG_TRAIT_TYPE,
    };
    use varnotes_core::models::VariantId;

    fn record(pairs: &[(&str, &str)]) -> AnnotationRecord {
        AnnotationRecord {
            tags: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn group(records: Vec<AnnotationRecord>) -> VariantAnnotationGroup {
        VariantAnnotationGroup {
            b37_id: "1-100-A-T".to_string(),
            variant: VariantId::parse("1-100-A-T"),
            records,
        }
    }

    #[test]
    fn test_names_dedup_first_seen_order() {
        let g = group(vec![
            record(&[(TAG_PREFERRED_NAME, "Name B")]),
            record(&[(TAG_PREFERRED_NAME, "Name A")]),
            record(&[(TAG_PREFERRED_NAME, "Name B")]),
            record(&[(TAG_PREFERRED_NAME, "")]),
            record(&[]),
            record(&[(TAG_PREFERRED_NAME, "Name A")]),
        ]);
        assert_eq!(merged_names(&g), vec!["Name B", "Name A"]);

        let summary = merge(&g);
        assert_eq!(summary.display_name(), "Name B or Name A");
        assert_eq!(
            summary.display_name_markup(),
            "Name B</b><br><small>or</small><br><b>Name A"
        );
    }

    #[test]
    fn test_frequency_first_wins() {
        let g = group(vec![
            record(&[(TAG_EXAC_FREQUENCY, "0.5")]),
            record(&[(TAG_EXAC_FREQUENCY, "0.5")]),
            record(&[(TAG_EXAC_FREQUENCY, "0.2")]),
        ]);
        assert_eq!(merged_frequency(&g), "0.5");
    }

    #[test]
    fn test_frequency_unknown_when_absent() {
        let g = group(vec![record(&[]), record(&[(TAG_PREFERRED_NAME, "X")])]);
        assert_eq!(merged_frequency(&g), "Unknown");
    }

    #[test]
    fn test_frequency_legacy_field_fallback() {
        let g = group(vec![
            record(&[]),
            record(&[(TAG_ESP_FREQUENCY, "0.013")]),
        ]);
        assert_eq!(merged_frequency(&g), "0.013");
    }

    #[test]
    fn test_merge_evidence_from_first_record() {
        let g = group(vec![
            record(&[(
                TAG_PREFERRED_NAME,
                "NM_000123.1(GENE1):c.100A>T (p.Lys34Ter)",
            )]),
            record(&[(
                TAG_PREFERRED_NAME,
                "NM_000999.1(OTHER):c.1A>T (p.Met1Leu)",
            )]),
        ]);
        assert_eq!(
            merge(&g).evidence_url,
            "http://evidence.pgp-hms.org/GENE1-Lys34Stop"
        );
    }

    #[test]
    fn test_detail_rows() {
        let g = group(vec![
            record(&[
                (TAG_TRAIT_TYPE, "Disease"),
                (TAG_ACCESSION, "RCV000013961"),
                (TAG_TRAIT_NAME, "Hypertrophic cardiomyopathy"),
                (TAG_SIGNIFICANCE, "Pathogenic"),
                (TAG_INHERITANCE, "Dominant"),
                (TAG_NOTES, "Well established."),
            ]),
            record(&[(TAG_TRAIT_TYPE, "DrugResponse")]),
        ]);
        let rows = detail_rows(&g);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].trait_label, TraitLabel::Disease);
        assert_eq!(rows[0].accession, "RCV000013961");
        assert_eq!(rows[0].trait_name, "Hypertrophic cardiomyopathy");
        assert_eq!(rows[0].significance, "Pathogenic");
        assert_eq!(
            rows[0].curation,
            "Inheritance: Dominant; Notes: Well established."
        );

        assert_eq!(rows[1].trait_label, TraitLabel::Trait);
        assert_eq!(rows[1].accession, "");
        assert_eq!(rows[1].trait_name, "");
        assert_eq!(rows[1].significance, "");
        assert_eq!(rows[1].curation, NO_CURATION_NOTES);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let g = group(vec![
            record(&[
                (TAG_PREFERRED_NAME, "NM_000123.1(GENE1):c.100A>T (p.Lys34Ter)"),
                (TAG_EXAC_FREQUENCY, "0.0001"),
            ]),
            record(&[(TAG_PREFERRED_NAME, "Other name")]),
        ]);
        assert_eq!(merge(&g), merge(&g));
        assert_eq!(detail_rows(&g), detail_rows(&g));
    }
}
