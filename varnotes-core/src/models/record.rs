use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::Deserialize;

/// Relation type tag of the clinically relevant annotation kind.
pub const CLINVAR_RCVA: &str = "clinvar-rcva";

pub const TAG_TYPE: &str = "type";
pub const TAG_PREFERRED_NAME: &str = "clinvar-rcva:preferred-name";
pub const TAG_TRAIT_TYPE: &str = "clinvar-rcva:trait-type";
pub const TAG_TRAIT_NAME: &str = "clinvar-rcva:trait-name";
pub const TAG_SIGNIFICANCE: &str = "clinvar-rcva:significance";
pub const TAG_ACCESSION: &str = "clinvar-rcva:accession";
pub const TAG_EXAC_FREQUENCY: &str = "clinvar-rcva:exac-allele-frequency";
pub const TAG_ESP_FREQUENCY: &str = "clinvar-rcva:esp-allele-frequency";
pub const TAG_INHERITANCE: &str = "clinvar-rcva:inheritance";
pub const TAG_EVIDENCE: &str = "clinvar-rcva:evidence";
pub const TAG_NOTES: &str = "clinvar-rcva:notes";

///
/// AnnotationRecord struct, one external clinical assertion as an
/// opaque tag map. Records are only read and grouped, never mutated.
///
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct AnnotationRecord {
    pub tags: HashMap<String, String>,
}

impl AnnotationRecord {
    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|s| s.as_str())
    }

    pub fn record_type(&self) -> Option<&str> {
        self.tag(TAG_TYPE)
    }

    pub fn is_clinvar_rcva(&self) -> bool {
        self.record_type() == Some(CLINVAR_RCVA)
    }

    pub fn preferred_name(&self) -> Option<&str> {
        self.tag(TAG_PREFERRED_NAME)
    }

    pub fn trait_name(&self) -> Option<&str> {
        self.tag(TAG_TRAIT_NAME)
    }

    pub fn significance(&self) -> Option<&str> {
        self.tag(TAG_SIGNIFICANCE)
    }

    pub fn accession(&self) -> Option<&str> {
        self.tag(TAG_ACCESSION)
    }

    ///
    /// Get the record's allele frequency. The ExAC field is the
    /// current source; the ESP field is kept as a fallback for
    /// records annotated before the source switched.
    ///
    pub fn allele_frequency(&self) -> Option<&str> {
        self.tag(TAG_EXAC_FREQUENCY)
            .or_else(|| self.tag(TAG_ESP_FREQUENCY))
    }

    pub fn inheritance(&self) -> Option<&str> {
        self.tag(TAG_INHERITANCE)
    }

    pub fn evidence(&self) -> Option<&str> {
        self.tag(TAG_EVIDENCE)
    }

    pub fn notes(&self) -> Option<&str> {
        self.tag(TAG_NOTES)
    }

    ///
    /// Get the trait label for this record: `"Disease"` maps to
    /// [TraitLabel::Disease], every other value (including a missing
    /// tag) maps to [TraitLabel::Trait].
    ///
    pub fn trait_label(&self) -> TraitLabel {
        match self.tag(TAG_TRAIT_TYPE) {
            Some("Disease") => TraitLabel::Disease,
            _ => TraitLabel::Trait,
        }
    }
}

///
/// RelationRecord struct, one entry of a variant's `relation_set` as
/// delivered by the annotation-fetch collaborator.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelationRecord {
    #[serde(default)]
    pub tags: AnnotationRecord,
}

/// Output label of a record's trait type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitLabel {
    Disease,
    Trait,
}

impl TraitLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraitLabel::Disease => "Disease",
            TraitLabel::Trait => "Trait",
        }
    }
}

impl Display for TraitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
