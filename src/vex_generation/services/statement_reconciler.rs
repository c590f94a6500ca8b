use super::statement_builder::StatementBuilder;
use super::statement_sorter::StatementSorter;
use crate::vex_generation::domain::{PackageConfiguration, Statement};
use crate::vex_generation::policies::AdvisoryPrecedence;
use chrono::{DateTime, Utc};

/// StatementReconciler service producing the final statement list of one package
pub struct StatementReconciler;

impl StatementReconciler {
    /// Builds, reconciles and orders the statements of a package configuration
    ///
    /// # Arguments
    /// * `configuration` - The package whose secfixes and advisories are read
    /// * `products` - Product identifiers every statement refers to
    /// * `document_timestamp` - Reference time for statements without their own
    pub fn reconcile(
        configuration: &PackageConfiguration,
        products: &[String],
        document_timestamp: DateTime<Utc>,
    ) -> Vec<Statement> {
        let advisories = StatementBuilder::from_advisories(&configuration.advisories, products);
        let secfixes = StatementBuilder::from_secfixes(&configuration.secfixes, products);

        // TODO: also weed out duplicate "fixed" statements listed under several secfixes versions
        let mut statements = AdvisoryPrecedence::apply(secfixes, advisories);
        StatementSorter::sort(&mut statements, document_timestamp);
        statements
    }
}
