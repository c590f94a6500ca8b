use crate::vex_generation::domain::{
    Advisories, AdvisoryContent, AdvisoryStatements, Secfixes, SecfixesStatements, Statement,
    Status,
};

/// Secfixes version meaning "never affected"
pub const NOT_AFFECTED_VERSION: &str = "0";

/// StatementBuilder service for turning package records into VEX statements
///
/// Record collections are ordered maps, so the output order follows
/// version (secfixes) or vulnerability ID (advisories), then entry order.
pub struct StatementBuilder;

impl StatementBuilder {
    /// Builds one statement per (version, vulnerability) secfixes pair
    ///
    /// A vulnerability listed under several versions yields one statement
    /// per version; those duplicates are not collapsed here.
    pub fn from_secfixes(secfixes: &Secfixes, products: &[String]) -> SecfixesStatements {
        let statements = secfixes
            .iter()
            .flat_map(|(version, vulnerabilities)| {
                vulnerabilities.iter().map(move |vulnerability| {
                    Statement::new(
                        vulnerability.clone(),
                        Self::determine_status(version),
                        products.to_vec(),
                    )
                })
            })
            .collect();

        SecfixesStatements::new(statements)
    }

    /// Builds one statement per (vulnerability, advisory entry) pair
    pub fn from_advisories(advisories: &Advisories, products: &[String]) -> AdvisoryStatements {
        let statements = advisories
            .iter()
            .flat_map(|(vulnerability, entries)| {
                entries
                    .iter()
                    .map(move |content| Self::from_advisory_content(vulnerability, content, products))
            })
            .collect();

        AdvisoryStatements::new(statements)
    }

    /// Derives the status of a secfixes entry from its version key
    pub fn determine_status(package_version: &str) -> Status {
        if package_version == NOT_AFFECTED_VERSION {
            Status::NotAffected
        } else {
            Status::Fixed
        }
    }

    fn from_advisory_content(
        vulnerability: &str,
        content: &AdvisoryContent,
        products: &[String],
    ) -> Statement {
        Statement {
            vulnerability: vulnerability.to_string(),
            timestamp: Some(content.timestamp),
            products: products.to_vec(),
            status: content.status,
            justification: content.justification,
            impact_statement: content.impact_statement.clone(),
            action_statement: content.action_statement.clone(),
        }
    }
}
