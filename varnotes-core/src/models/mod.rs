pub mod batch;
pub mod group;
pub mod record;
pub mod variant_id;

// re-export for cleaner imports
pub use self::batch::{AnnotationBatch, VariantResult};
pub use self::group::VariantAnnotationGroup;
pub use self::record::{AnnotationRecord, RelationRecord, TraitLabel};
pub use self::variant_id::VariantId;
