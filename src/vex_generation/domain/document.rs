use super::statement::Statement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON-LD context of OpenVEX documents
pub const OPENVEX_CONTEXT: &str = "https://openvex.dev/ns";

/// Author recorded when none is configured
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Author role recorded when none is configured
pub const DEFAULT_AUTHOR_ROLE: &str = "Document Creator";

/// An OpenVEX document: metadata plus an ordered statement list
///
/// Used both for the per-package sub-documents and for the merged output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VexDocument {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "role", default)]
    pub author_role: String,
    pub timestamp: DateTime<Utc>,
    pub version: u32,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl VexDocument {
    /// Creates an empty document stamped with the given generation time
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            context: OPENVEX_CONTEXT.to_string(),
            id: String::new(),
            author: String::new(),
            author_role: String::new(),
            timestamp,
            version: 1,
            statements: Vec::new(),
        }
    }
}

/// Settings applied to every generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexConfig {
    /// Distribution namespace used for product identifiers
    pub distro: String,
    pub author: String,
    pub author_role: String,
}

impl VexConfig {
    pub fn new(
        distro: impl Into<String>,
        author: impl Into<String>,
        author_role: impl Into<String>,
    ) -> Self {
        Self {
            distro: distro.into(),
            author: author.into(),
            author_role: author_role.into(),
        }
    }
}

/// Parameters handed to the document merge collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub document_id: String,
    pub author: String,
    pub author_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vex_generation::domain::Status;
    use chrono::TimeZone;

    #[test]
    fn test_new_document_uses_openvex_context() {
        let timestamp = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let doc = VexDocument::new(timestamp);
        assert_eq!(doc.context, OPENVEX_CONTEXT);
        assert_eq!(doc.timestamp, timestamp);
        assert_eq!(doc.version, 1);
        assert!(doc.statements.is_empty());
    }

    #[test]
    fn test_document_json_field_names() {
        let timestamp = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let mut doc = VexDocument::new(timestamp);
        doc.id = "vex-abc".to_string();
        doc.author_role = "Maintainer".to_string();
        doc.statements.push(Statement::new(
            "CVE-2023-0001",
            Status::Fixed,
            vec!["pkg:apk/wolfi/zlib@1.3-r0".to_string()],
        ));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["@context"], OPENVEX_CONTEXT);
        assert_eq!(json["@id"], "vex-abc");
        assert_eq!(json["role"], "Maintainer");
        assert_eq!(json["statements"][0]["vulnerability"], "CVE-2023-0001");
    }
}
