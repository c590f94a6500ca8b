use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::PackageConfiguration;
use sha2::{Digest, Sha256};
use std::io::Write;

/// Prefix of every generated document identifier
pub const DOCUMENT_ID_PREFIX: &str = "vex-";

/// Separator between per-configuration digests before the final hash
const DIGEST_SEPARATOR: &str = ":";

/// DocumentIdentity service computing content-derived document identifiers
///
/// The identifier depends only on the configurations' content, never on
/// their order: each configuration is hashed on its own and the digests
/// are sorted before they are combined.
pub struct DocumentIdentity;

impl DocumentIdentity {
    /// Generates the identifier of a batch of package configurations
    ///
    /// # Returns
    /// `vex-<hex sha256>` of the sorted, `:`-joined per-configuration digests
    ///
    /// # Errors
    /// Returns `VexError::Serialization` or `VexError::Hashing` if any
    /// configuration cannot be processed. The whole batch fails.
    pub fn generate<'a>(
        configurations: impl IntoIterator<Item = &'a PackageConfiguration>,
    ) -> Result<String> {
        let mut digests = configurations
            .into_iter()
            .map(Self::configuration_digest)
            .collect::<Result<Vec<String>>>()?;

        digests.sort();

        let combined = Self::sha256_hex(
            digests.join(DIGEST_SEPARATOR).as_bytes(),
            "configuration digests",
        )?;

        Ok(format!("{}{}", DOCUMENT_ID_PREFIX, combined))
    }

    /// Hex SHA-256 of one configuration's canonical YAML serialization
    pub fn configuration_digest(configuration: &PackageConfiguration) -> Result<String> {
        let data = serde_yaml_ng::to_string(&configuration.canonical_form()).map_err(|e| {
            VexError::Serialization {
                package: configuration.package.name.clone(),
                details: e.to_string(),
            }
        })?;

        Self::sha256_hex(
            data.as_bytes(),
            &format!("package configuration {}", configuration.package.name),
        )
    }

    fn sha256_hex(data: &[u8], subject: &str) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.write_all(data).map_err(|e| VexError::Hashing {
            subject: subject.to_string(),
            details: e.to_string(),
        })?;
        Ok(format!("{:x}", hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vex_generation::domain::{AdvisoryContent, Package, Status};
    use chrono::{TimeZone, Utc};

    fn config(name: &str, version: &str) -> PackageConfiguration {
        let mut configuration = PackageConfiguration::new(Package::new(name, version, 0));
        configuration
            .secfixes
            .insert("0".to_string(), vec!["CVE-2020-0001".to_string()]);
        configuration
    }

    #[test]
    fn test_identity_has_prefix_and_sha256_length() {
        let id = DocumentIdentity::generate(&[config("zlib", "1.3")]).unwrap();
        assert!(id.starts_with("vex-"));
        let hex = id.strip_prefix("vex-").unwrap();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_identity_is_deterministic() {
        let configs = vec![config("zlib", "1.3"), config("openssl", "3.1.2")];
        let first = DocumentIdentity::generate(&configs).unwrap();
        let second = DocumentIdentity::generate(&configs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_identity_is_order_independent() {
        let forward = vec![
            config("zlib", "1.3"),
            config("openssl", "3.1.2"),
            config("curl", "8.4.0"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            DocumentIdentity::generate(&forward).unwrap(),
            DocumentIdentity::generate(&reversed).unwrap()
        );
    }

    #[test]
    fn test_identity_changes_with_content() {
        let base = DocumentIdentity::generate(&[config("zlib", "1.3")]).unwrap();

        let bumped = DocumentIdentity::generate(&[config("zlib", "1.3.1")]).unwrap();
        assert_ne!(base, bumped);

        let mut advised = config("zlib", "1.3");
        advised.advisories.insert(
            "CVE-2020-0001".to_string(),
            vec![AdvisoryContent::new(
                Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
                Status::Affected,
            )],
        );
        assert_ne!(base, DocumentIdentity::generate(&[advised]).unwrap());
    }

    #[test]
    fn test_identity_changes_with_unmodeled_sections() {
        let plain = PackageConfiguration::from_yaml(
            "package:\n  name: zlib\n  version: 1.3\npipeline:\n  - uses: fetch\n",
        )
        .unwrap();
        let changed = PackageConfiguration::from_yaml(
            "package:\n  name: zlib\n  version: 1.3\npipeline:\n  - uses: git-checkout\n",
        )
        .unwrap();

        assert_ne!(
            DocumentIdentity::generate(&[plain]).unwrap(),
            DocumentIdentity::generate(&[changed]).unwrap()
        );
    }

    #[test]
    fn test_identity_distinguishes_look_alike_numeric_scalars() {
        let with_version = |version: &str| {
            PackageConfiguration::from_yaml(&format!(
                "package:\n  name: zlib\n  version: 1.3\n\
                 pipeline:\n  - uses: fetch\n    with:\n      expected-version: {}\n",
                version
            ))
            .unwrap()
        };

        assert_ne!(
            DocumentIdentity::generate(&[with_version("1.10")]).unwrap(),
            DocumentIdentity::generate(&[with_version("1.1")]).unwrap()
        );
        assert_ne!(
            DocumentIdentity::generate(&[with_version("0x10")]).unwrap(),
            DocumentIdentity::generate(&[with_version("16")]).unwrap()
        );
    }

    #[test]
    fn test_identity_of_empty_batch_is_hash_of_empty_string() {
        let id = DocumentIdentity::generate(&[] as &[PackageConfiguration]).unwrap();
        assert_eq!(
            id,
            "vex-e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_configuration_digest_matches_manual_sha256() {
        let configuration = config("zlib", "1.3");
        let yaml = serde_yaml_ng::to_string(&configuration.canonical_form()).unwrap();
        let expected = format!("{:x}", Sha256::digest(yaml.as_bytes()));
        assert_eq!(
            DocumentIdentity::configuration_digest(&configuration).unwrap(),
            expected
        );
    }
}
