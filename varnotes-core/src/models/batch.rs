use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;
use serde::Deserialize;

use crate::errors::AnnotationError;
use crate::models::record::RelationRecord;
use crate::utils::get_dynamic_reader;

///
/// VariantResult struct, the annotation-fetch payload for one
/// variant: the raw b37 identifier and its relation records.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariantResult {
    pub b37_id: String,
    #[serde(default)]
    pub relation_set: Vec<RelationRecord>,
}

///
/// AnnotationBatch struct, one already-fetched batch of variant
/// annotation results, in request order.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnnotationBatch {
    pub results: Vec<VariantResult>,
}

impl AnnotationBatch {
    ///
    /// Get the list of raw variant identifiers in this batch, in
    /// input order. This is the unit of request handed to the
    /// annotation-fetch collaborator.
    ///
    pub fn variant_ids(&self) -> Vec<String> {
        self.results.iter().map(|r| r.b37_id.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

impl TryFrom<&Path> for AnnotationBatch {
    type Error = anyhow::Error;

    ///
    /// Create a new [AnnotationBatch] from a JSON file on disk
    /// (`.json` or `.json.gz`) holding the fetched `{"results": []}`
    /// payload.
    ///
    /// # Arguments:
    /// - value: path to the batch file on disk.
    ///
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| AnnotationError::FileReadError(e.to_string()))?;

        let batch: AnnotationBatch = serde_json::from_reader(reader)
            .map_err(|e| AnnotationError::BatchParseError(e.to_string()))?;

        debug!(
            "Loaded annotation batch with {} results from {:?}",
            batch.results.len(),
            value
        );

        Ok(batch)
    }
}

impl TryFrom<&PathBuf> for AnnotationBatch {
    type Error = anyhow::Error;

    fn try_from(value: &PathBuf) -> Result<Self> {
        AnnotationBatch::try_from(value.as_path())
    }
}

impl TryFrom<&str> for AnnotationBatch {
    type Error = anyhow::Error;

    ///
    /// Create a new [AnnotationBatch] from a JSON string.
    ///
    fn try_from(value: &str) -> Result<Self> {
        let batch: AnnotationBatch = serde_json::from_str(value)
            .map_err(|e| AnnotationError::BatchParseError(e.to_string()))?;
        Ok(batch)
    }
}
