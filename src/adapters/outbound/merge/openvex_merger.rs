use crate::ports::outbound::DocumentMerger;
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::document::{DEFAULT_AUTHOR, DEFAULT_AUTHOR_ROLE};
use crate::vex_generation::domain::{MergeOptions, Statement, VexDocument};
use crate::vex_generation::services::StatementSorter;
use chrono::{DateTime, Utc};

/// OpenVexMerger adapter combining sub-documents into one OpenVEX document
///
/// Statements keep their own timestamp or inherit their sub-document's.
/// They are concatenated in sub-document order and sorted against the
/// merged document's timestamp. No statement-level deduplication is done.
pub struct OpenVexMerger {
    timestamp: Option<DateTime<Utc>>,
}

impl OpenVexMerger {
    /// Creates a merger that stamps the merged document with the current time
    pub fn new() -> Self {
        Self { timestamp: None }
    }

    /// Creates a merger that stamps the merged document with a fixed time
    pub fn with_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }

    fn validate_statement(index: usize, statement: &Statement) -> Result<()> {
        if statement.vulnerability.trim().is_empty() {
            return Err(VexError::Merge {
                details: format!("document {} has a statement without a vulnerability", index),
            }
            .into());
        }

        if statement.products.is_empty() {
            return Err(VexError::Merge {
                details: format!(
                    "document {} has a statement for {} without products",
                    index, statement.vulnerability
                ),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for OpenVexMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentMerger for OpenVexMerger {
    fn merge(&self, options: &MergeOptions, documents: Vec<VexDocument>) -> Result<VexDocument> {
        if documents.is_empty() {
            return Err(VexError::Merge {
                details: "at least one VEX document is required to merge".to_string(),
            }
            .into());
        }

        let mut merged = VexDocument::new(self.timestamp.unwrap_or_else(Utc::now));
        merged.id = options.document_id.clone();
        merged.author = non_empty_or(&options.author, DEFAULT_AUTHOR);
        merged.author_role = non_empty_or(&options.author_role, DEFAULT_AUTHOR_ROLE);

        let mut statements = Vec::new();
        for (index, document) in documents.into_iter().enumerate() {
            let document_timestamp = document.timestamp;
            for mut statement in document.statements {
                Self::validate_statement(index, &statement)?;
                statement.timestamp.get_or_insert(document_timestamp.into());
                statements.push(statement);
            }
        }

        StatementSorter::sort(&mut statements, merged.timestamp);
        merged.statements = statements;
        Ok(merged)
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
