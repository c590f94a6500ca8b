use serde::{Deserialize, Serialize};

/// Reference type of package-URL external references
pub const PURL_REFERENCE_TYPE: &str = "purl";

/// The subset of an SPDX 2.x JSON document needed to locate package URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    #[serde(rename = "SPDXID", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub spdx_version: String,
    #[serde(default)]
    pub packages: Vec<SpdxPackage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    #[serde(rename = "SPDXID", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version_info: String,
    #[serde(default)]
    pub external_refs: Vec<ExternalRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    #[serde(rename = "referenceCategory", default)]
    pub category: String,
    #[serde(rename = "referenceLocator")]
    pub locator: String,
    #[serde(rename = "referenceType")]
    pub reference_type: String,
}

impl ExternalRef {
    pub fn purl(locator: impl Into<String>) -> Self {
        Self {
            category: "PACKAGE_MANAGER".to_string(),
            locator: locator.into(),
            reference_type: PURL_REFERENCE_TYPE.to_string(),
        }
    }
}
