use super::status::{Justification, Status};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A claim about one vulnerability affecting a set of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub vulnerability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub products: Vec<String>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_statement: Option<String>,
}

impl Statement {
    /// Creates a statement with no narrative or timestamp attached
    pub fn new(vulnerability: impl Into<String>, status: Status, products: Vec<String>) -> Self {
        Self {
            vulnerability: vulnerability.into(),
            timestamp: None,
            products,
            status,
            justification: None,
            impact_statement: None,
            action_statement: None,
        }
    }
}

/// Statements derived from the legacy `secfixes` record source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecfixesStatements(Vec<Statement>);

impl SecfixesStatements {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self(statements)
    }

    pub fn as_slice(&self) -> &[Statement] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Statement> {
        self.0
    }
}

/// Statements derived from the `advisories` record source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvisoryStatements(Vec<Statement>);

impl AdvisoryStatements {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self(statements)
    }

    pub fn as_slice(&self) -> &[Statement] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Statement> {
        self.0
    }
}
