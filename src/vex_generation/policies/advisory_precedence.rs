use crate::vex_generation::domain::{AdvisoryStatements, SecfixesStatements, Statement, Status};
use std::collections::HashSet;

/// AdvisoryPrecedence policy for combining the two record sources of a package
///
/// Advisories are the curated source and take precedence over secfixes:
///
/// 1. When any advisory says a vulnerability is `not_affected`, every
///    secfixes statement for that vulnerability is dropped.
/// 2. A secfixes `not_affected` claim is dropped as soon as any advisory
///    exists for the same vulnerability, whatever its status.
///
/// Advisory statements are always kept.
pub struct AdvisoryPrecedence;

impl AdvisoryPrecedence {
    /// Combines both sources: surviving secfixes statements first, then all
    /// advisory statements, each group in its original order
    pub fn apply(secfixes: SecfixesStatements, advisories: AdvisoryStatements) -> Vec<Statement> {
        let not_affected = Self::vulnerabilities_where(advisories.as_slice(), |s| {
            s.status == Status::NotAffected
        });
        let advised = Self::vulnerabilities_where(advisories.as_slice(), |_| true);

        let mut statements: Vec<Statement> = secfixes
            .into_inner()
            .into_iter()
            .filter(|s| !Self::is_superseded(s, &not_affected, &advised))
            .collect();

        statements.extend(advisories.into_inner());
        statements
    }

    /// Whether a secfixes statement is obviated by the advisories
    pub fn is_superseded(
        statement: &Statement,
        not_affected: &HashSet<String>,
        advised: &HashSet<String>,
    ) -> bool {
        not_affected.contains(&statement.vulnerability)
            || (statement.status == Status::NotAffected && advised.contains(&statement.vulnerability))
    }

    fn vulnerabilities_where(
        statements: &[Statement],
        predicate: impl Fn(&Statement) -> bool,
    ) -> HashSet<String> {
        statements
            .iter()
            .filter(|&s| predicate(s))
            .map(|s| s.vulnerability.clone())
            .collect()
    }
}
