use super::status::{Justification, Status};
use super::yaml_node::YamlNode;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Legacy fix records: package version -> vulnerability IDs.
///
/// The version `"0"` means the package was never affected.
pub type Secfixes = BTreeMap<String, Vec<String>>;

/// Advisory records: vulnerability ID -> history of advisory entries
pub type Advisories = BTreeMap<String, Vec<AdvisoryContent>>;

/// Sections of a configuration document that this tool does not interpret
/// (pipelines, environment, ...). They take part in the canonical form.
pub type ExtraFields = BTreeMap<String, YamlNode>;

const CONFIGURATION_KEYS: &[&str] = &["package", "subpackages", "secfixes", "advisories"];
const PACKAGE_KEYS: &[&str] = &["name", "version", "epoch", "description"];
const SUBPACKAGE_KEYS: &[&str] = &["name"];

/// A melange package build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageConfiguration {
    #[serde(serialize_with = "serialize_package")]
    pub package: Package,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_subpackages"
    )]
    pub subpackages: Vec<Subpackage>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secfixes: Secfixes,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub advisories: Advisories,
    #[serde(skip)]
    pub extra: ExtraFields,
}

impl PackageConfiguration {
    pub fn new(package: Package) -> Self {
        Self {
            package,
            subpackages: Vec::new(),
            secfixes: Secfixes::new(),
            advisories: Advisories::new(),
            extra: ExtraFields::new(),
        }
    }

    /// Parses a YAML configuration document.
    ///
    /// Scalars are read verbatim, so `0:` and `1.10` stay strings.
    /// Keys outside the modeled fields are retained in `extra`, with their
    /// scalars kept as source text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        let mut config: PackageConfiguration = serde_yaml_ng::from_str(content)?;
        let document = YamlNode::from_yaml(content)?;

        config.extra = document.entries_except(CONFIGURATION_KEYS);
        config.package.extra = document
            .get("package")
            .map(|p| p.entries_except(PACKAGE_KEYS))
            .unwrap_or_default();

        let subpackage_documents = document
            .get("subpackages")
            .map(YamlNode::items)
            .unwrap_or_default();
        for (subpackage, node) in config.subpackages.iter_mut().zip(subpackage_documents) {
            subpackage.extra = node.entries_except(SUBPACKAGE_KEYS);
        }

        Ok(config)
    }

    /// Field-order-stable view of the whole configuration, including
    /// unmodeled sections, for content hashing
    pub fn canonical_form(&self) -> impl Serialize + '_ {
        WithExtra {
            modeled: self,
            extra: &self.extra,
        }
    }

    /// Names of the main package and every subpackage it produces
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.package.name.as_str())
            .chain(self.subpackages.iter().map(|s| s.name.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub epoch: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub extra: ExtraFields,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>, epoch: u64) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            epoch,
            description: None,
            extra: ExtraFields::new(),
        }
    }

    /// Full apk version string, `<version>-r<epoch>`
    pub fn full_version(&self) -> String {
        format!("{}-r{}", self.version, self.epoch)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subpackage {
    pub name: String,
    #[serde(skip)]
    pub extra: ExtraFields,
}

impl Subpackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: ExtraFields::new(),
        }
    }
}

/// One timestamped advisory entry for a vulnerability
///
/// The timestamp keeps the offset it was written with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryContent {
    pub timestamp: DateTime<FixedOffset>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,
    #[serde(rename = "impact", default, skip_serializing_if = "Option::is_none")]
    pub impact_statement: Option<String>,
    #[serde(rename = "action", default, skip_serializing_if = "Option::is_none")]
    pub action_statement: Option<String>,
}

impl AdvisoryContent {
    pub fn new(timestamp: impl Into<DateTime<FixedOffset>>, status: Status) -> Self {
        Self {
            timestamp: timestamp.into(),
            status,
            justification: None,
            impact_statement: None,
            action_statement: None,
        }
    }
}

/// Serializes a modeled struct followed by its retained extra keys
#[derive(Serialize)]
struct WithExtra<'a, T: Serialize> {
    #[serde(flatten)]
    modeled: &'a T,
    #[serde(flatten)]
    extra: &'a ExtraFields,
}

fn serialize_package<S: Serializer>(package: &Package, serializer: S) -> Result<S::Ok, S::Error> {
    WithExtra {
        modeled: package,
        extra: &package.extra,
    }
    .serialize(serializer)
}

fn serialize_subpackages<S: Serializer>(
    subpackages: &[Subpackage],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(subpackages.iter().map(|s| WithExtra {
        modeled: s,
        extra: &s.extra,
    }))
}
