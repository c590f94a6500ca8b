mod document_identity;
mod product_extractor;
mod statement_builder;
mod statement_reconciler;
mod statement_sorter;
mod vex_assembler;

pub use document_identity::{DocumentIdentity, DOCUMENT_ID_PREFIX};
pub use product_extractor::ProductExtractor;
pub use statement_builder::{StatementBuilder, NOT_AFFECTED_VERSION};
pub use statement_reconciler::StatementReconciler;
pub use statement_sorter::StatementSorter;
pub use vex_assembler::{ScopedConfiguration, VexAssembler};
