use crate::shared::Result;
use crate::vex_generation::domain::{MergeOptions, VexDocument};

/// DocumentMerger port for combining per-package VEX documents
///
/// The merge algorithm is injected so statement reconciliation can be
/// exercised without depending on a particular merge implementation.
pub trait DocumentMerger {
    /// Merges sub-documents into one document carrying the given identity
    /// and author metadata
    ///
    /// # Errors
    /// Returns an error if the sub-documents are rejected (e.g. an empty list
    /// or a malformed statement)
    fn merge(&self, options: &MergeOptions, documents: Vec<VexDocument>) -> Result<VexDocument>;
}
