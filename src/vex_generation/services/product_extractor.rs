use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::spdx::PURL_REFERENCE_TYPE;
use crate::vex_generation::domain::{PackageConfiguration, SpdxDocument};
use packageurl::PackageUrl;
use std::collections::HashSet;
use std::str::FromStr;

/// Package URL type of apk packages
const APK_PURL_TYPE: &str = "apk";

/// ProductExtractor service for computing the products statements refer to
///
/// Products are canonical package URLs scoped to a distribution namespace.
pub struct ProductExtractor;

impl ProductExtractor {
    /// Derives the product identifiers of a package configuration
    ///
    /// One `pkg:apk/<distro>/<name>@<version>-r<epoch>` per subpackage,
    /// followed by the main package. Subpackages share the parent's version.
    pub fn from_configuration(configuration: &PackageConfiguration, distro: &str) -> Vec<String> {
        let version = configuration.package.full_version();

        configuration
            .subpackages
            .iter()
            .map(|s| s.name.as_str())
            .chain(std::iter::once(configuration.package.name.as_str()))
            .map(|name| Self::apk_package_url(distro, name, &version))
            .collect()
    }

    /// Extracts the package URLs of distribution packages listed in an SBOM
    ///
    /// Only `purl` external references are considered, and only those whose
    /// namespace equals `distro` are kept.
    ///
    /// # Errors
    /// Returns `VexError::ProductUrlParse` for the first malformed locator.
    /// No partial list is returned.
    pub fn from_sbom(sbom: &SpdxDocument, distro: &str) -> Result<Vec<PackageUrl<'static>>> {
        let mut purls = Vec::new();

        for package in &sbom.packages {
            for reference in &package.external_refs {
                if reference.reference_type != PURL_REFERENCE_TYPE {
                    continue;
                }

                let purl = PackageUrl::from_str(&reference.locator).map_err(|e| {
                    VexError::ProductUrlParse {
                        locator: reference.locator.clone(),
                        details: e.to_string(),
                    }
                })?;

                if purl.namespace() == Some(distro) {
                    purls.push(purl);
                }
            }
        }

        Ok(purls)
    }

    /// Selects the SBOM package URLs that belong to a configuration
    ///
    /// A package URL belongs to the configuration when its name is the
    /// package's name or one of its subpackages' names. Repeated package
    /// URLs are listed once, in order of first appearance.
    pub fn match_configuration(
        purls: &[PackageUrl<'static>],
        configuration: &PackageConfiguration,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        purls
            .iter()
            .filter(|purl| configuration.package_names().any(|name| name == purl.name()))
            .map(|purl| purl.to_string())
            .filter(|purl| seen.insert(purl.clone()))
            .collect()
    }

    fn apk_package_url(distro: &str, name: &str, version: &str) -> String {
        format!(
            "pkg:{}/{}/{}@{}",
            APK_PURL_TYPE,
            urlencoding::encode(distro),
            urlencoding::encode(name),
            urlencoding::encode(version)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vex_generation::domain::{ExternalRef, Package, SpdxPackage, Subpackage};

    fn openssl_configuration() -> PackageConfiguration {
        let mut configuration = PackageConfiguration::new(Package::new("openssl", "3.1.2", 1));
        configuration.subpackages = vec![Subpackage::new("openssl-dev"), Subpackage::new("libssl3")];
        configuration
    }

    fn sbom_with_refs(refs: Vec<ExternalRef>) -> SpdxDocument {
        SpdxDocument {
            packages: vec![SpdxPackage {
                name: "image".to_string(),
                external_refs: refs,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_from_configuration_lists_subpackages_then_main_package() {
        let products = ProductExtractor::from_configuration(&openssl_configuration(), "wolfi");
        assert_eq!(
            products,
            vec![
                "pkg:apk/wolfi/openssl-dev@3.1.2-r1",
                "pkg:apk/wolfi/libssl3@3.1.2-r1",
                "pkg:apk/wolfi/openssl@3.1.2-r1",
            ]
        );
    }

    #[test]
    fn test_from_configuration_is_deterministic() {
        let configuration = openssl_configuration();
        let first = ProductExtractor::from_configuration(&configuration, "wolfi");
        let second = ProductExtractor::from_configuration(&configuration, "wolfi");
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_configuration_percent_encodes_version() {
        let configuration = PackageConfiguration::new(Package::new("gcc", "13.2.0+git1", 0));
        let products = ProductExtractor::from_configuration(&configuration, "wolfi");
        assert_eq!(products, vec!["pkg:apk/wolfi/gcc@13.2.0%2Bgit1-r0"]);
    }

    #[test]
    fn test_from_configuration_uses_distro_namespace() {
        let configuration = PackageConfiguration::new(Package::new("zlib", "1.3", 0));
        let products = ProductExtractor::from_configuration(&configuration, "chainguard");
        assert_eq!(products, vec!["pkg:apk/chainguard/zlib@1.3-r0"]);
    }

    #[test]
    fn test_from_sbom_ignores_non_purl_references() {
        let sbom = sbom_with_refs(vec![
            ExternalRef {
                category: "SECURITY".to_string(),
                locator: "cpe:2.3:a:zlib:zlib:1.3:*:*:*:*:*:*:*".to_string(),
                reference_type: "cpe23Type".to_string(),
            },
            ExternalRef::purl("pkg:apk/wolfi/zlib@1.3-r0"),
        ]);

        let purls = ProductExtractor::from_sbom(&sbom, "wolfi").unwrap();
        assert_eq!(purls.len(), 1);
        assert_eq!(purls[0].name(), "zlib");
    }

    #[test]
    fn test_from_sbom_excludes_other_namespaces() {
        let sbom = sbom_with_refs(vec![
            ExternalRef::purl("pkg:apk/alpine/zlib@1.3-r0"),
            ExternalRef::purl("pkg:apk/wolfi/openssl@3.1.2-r1"),
        ]);

        let purls = ProductExtractor::from_sbom(&sbom, "wolfi").unwrap();
        assert_eq!(purls.len(), 1);
        assert_eq!(purls[0].namespace(), Some("wolfi"));
        assert_eq!(purls[0].name(), "openssl");
    }

    #[test]
    fn test_from_sbom_fails_on_malformed_purl() {
        let sbom = sbom_with_refs(vec![
            ExternalRef::purl("pkg:apk/wolfi/zlib@1.3-r0"),
            ExternalRef::purl("not a package url"),
        ]);

        let result = ProductExtractor::from_sbom(&sbom, "wolfi");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse package URL"));
        assert!(err.contains("not a package url"));
    }

    #[test]
    fn test_match_configuration_lists_repeated_purls_once() {
        let sbom = sbom_with_refs(vec![
            ExternalRef::purl("pkg:apk/wolfi/openssl@3.1.2-r1"),
            ExternalRef::purl("pkg:apk/wolfi/openssl@3.1.2-r1"),
        ]);
        let purls = ProductExtractor::from_sbom(&sbom, "wolfi").unwrap();

        let products = ProductExtractor::match_configuration(&purls, &openssl_configuration());
        assert_eq!(products, vec!["pkg:apk/wolfi/openssl@3.1.2-r1"]);
    }

    #[test]
    fn test_match_configuration_by_package_and_subpackage_names() {
        let sbom = sbom_with_refs(vec![
            ExternalRef::purl("pkg:apk/wolfi/libssl3@3.1.2-r1"),
            ExternalRef::purl("pkg:apk/wolfi/zlib@1.3-r0"),
            ExternalRef::purl("pkg:apk/wolfi/openssl@3.1.2-r1"),
        ]);
        let purls = ProductExtractor::from_sbom(&sbom, "wolfi").unwrap();

        let products = ProductExtractor::match_configuration(&purls, &openssl_configuration());
        assert_eq!(
            products,
            vec![
                "pkg:apk/wolfi/libssl3@3.1.2-r1",
                "pkg:apk/wolfi/openssl@3.1.2-r1",
            ]
        );
    }
}
