use log::debug;

use crate::models::batch::VariantResult;
use crate::models::record::AnnotationRecord;
use crate::models::variant_id::VariantId;

///
/// VariantAnnotationGroup struct, the clinvar-rcva records of one
/// variant. Only constructed when at least one record survives the
/// type filter; a variant with none is suppressed from output (the
/// usual multi-allele-record case), which is why the constructor
/// returns an `Option` rather than an empty group.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAnnotationGroup {
    pub b37_id: String,
    pub variant: Option<VariantId>,
    pub records: Vec<AnnotationRecord>,
}

impl VariantAnnotationGroup {
    ///
    /// Create a new [VariantAnnotationGroup] from one fetched
    /// variant result, keeping records in input order.
    ///
    /// # Arguments
    /// - result: one variant's annotation-fetch payload
    ///
    pub fn from_result(result: &VariantResult) -> Option<VariantAnnotationGroup> {
        let records: Vec<AnnotationRecord> = result
            .relation_set
            .iter()
            .filter(|relation| relation.tags.is_clinvar_rcva())
            .map(|relation| relation.tags.clone())
            .collect();

        if records.is_empty() {
            debug!("No clinvar-rcva records for {}, suppressing", result.b37_id);
            return None;
        }

        let variant = VariantId::parse(&result.b37_id);
        if variant.is_none() {
            debug!("Unparseable variant identifier: {}", result.b37_id);
        }

        Some(VariantAnnotationGroup {
            b37_id: result.b37_id.clone(),
            variant,
            records,
        })
    }

    ///
    /// Get the first record of the group. Safe because a group is
    /// only ever constructed non-empty.
    ///
    pub fn first_record(&self) -> &AnnotationRecord {
        &self.records[0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{RelationRecord, CLINVAR_RCVA, TAG_TYPE};
    use pretty_assertions::assert_eq;

    fn relation(record_type: &str) -> RelationRecord {
        let mut record = AnnotationRecord::default();
        record
            .tags
            .insert(TAG_TYPE.to_string(), record_type.to_string());
        RelationRecord { tags: record }
    }

    #[test]
    fn test_group_filters_to_rcva() {
        let result = VariantResult {
            b37_id: "1-100-A-T".to_string(),
            relation_set: vec![
                relation(CLINVAR_RCVA),
                relation("clinvar-rcv"),
                relation(CLINVAR_RCVA),
            ],
        };
        let group = VariantAnnotationGroup::from_result(&result).unwrap();
        assert_eq!(group.len(), 2);
        assert!(group.variant.is_some());
    }

    #[test]
    fn test_empty_group_is_suppressed() {
        let result = VariantResult {
            b37_id: "1-100-A-T".to_string(),
            relation_set: vec![relation("clinvar-rcv")],
        };
        assert_eq!(VariantAnnotationGroup::from_result(&result), None);
    }

    #[test]
    fn test_unparseable_id_keeps_group() {
        let result = VariantResult {
            b37_id: "99-123-XX-Y".to_string(),
            relation_set: vec![relation(CLINVAR_RCVA)],
        };
        let group = VariantAnnotationGroup::from_result(&result).unwrap();
        assert_eq!(group.variant, None);
        assert_eq!(group.b37_id, "99-123-XX-Y");
    }
}
