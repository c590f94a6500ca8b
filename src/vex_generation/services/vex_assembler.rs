use super::statement_reconciler::StatementReconciler;
use crate::vex_generation::domain::{MergeOptions, PackageConfiguration, VexConfig, VexDocument};
use chrono::{DateTime, Utc};

/// A package configuration paired with the products its statements cover
#[derive(Debug, Clone)]
pub struct ScopedConfiguration {
    pub configuration: PackageConfiguration,
    pub products: Vec<String>,
}

impl ScopedConfiguration {
    pub fn new(configuration: PackageConfiguration, products: Vec<String>) -> Self {
        Self {
            configuration,
            products,
        }
    }
}

/// VexAssembler service preparing the inputs of a document merge
pub struct VexAssembler;

impl VexAssembler {
    /// Builds the sub-document of one package, stamped with `timestamp`
    pub fn build_subdocument(scoped: &ScopedConfiguration, timestamp: DateTime<Utc>) -> VexDocument {
        let mut document = VexDocument::new(timestamp);
        document.statements =
            StatementReconciler::reconcile(&scoped.configuration, &scoped.products, timestamp);
        document
    }

    pub fn merge_options(config: &VexConfig, document_id: String) -> MergeOptions {
        MergeOptions {
            document_id,
            author: config.author.clone(),
            author_role: config.author_role.clone(),
        }
    }
}
