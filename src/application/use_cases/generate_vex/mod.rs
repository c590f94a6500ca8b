use crate::application::dto::{VexRequest, VexResponse};
use crate::ports::outbound::{ConfigurationReader, DocumentMerger, ProgressReporter, SbomReader};
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::{PackageConfiguration, VexConfig, VexDocument};
use crate::vex_generation::services::{
    DocumentIdentity, ProductExtractor, ScopedConfiguration, VexAssembler,
};
use anyhow::Context;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// GenerateVexUseCase - Core use case for VEX document generation
///
/// This use case orchestrates the VEX generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CR` - ConfigurationReader implementation
/// * `SR` - SbomReader implementation
/// * `M` - DocumentMerger implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateVexUseCase<CR, SR, M, PR> {
    configuration_reader: CR,
    sbom_reader: SR,
    merger: M,
    progress_reporter: PR,
}

impl<CR, SR, M, PR> GenerateVexUseCase<CR, SR, M, PR>
where
    CR: ConfigurationReader,
    SR: SbomReader,
    M: DocumentMerger,
    PR: ProgressReporter,
{
    /// Creates a new GenerateVexUseCase with injected dependencies
    pub fn new(configuration_reader: CR, sbom_reader: SR, merger: M, progress_reporter: PR) -> Self {
        Self {
            configuration_reader,
            sbom_reader,
            merger,
            progress_reporter,
        }
    }

    /// Executes the VEX generation use case
    ///
    /// # Arguments
    /// * `request` - Configuration paths, optional SBOM path and VEX settings
    ///
    /// # Returns
    /// VexResponse containing the merged document and any skipped packages
    pub fn execute(&self, request: VexRequest) -> Result<VexResponse> {
        // Step 1: Load every package configuration
        let configurations = self.load_configurations(&request.configuration_paths)?;

        // Step 2: Scope each configuration to its products
        let (scoped, skipped_packages) = match &request.sbom_path {
            Some(sbom_path) => self.scope_with_sbom(&request.config, configurations, sbom_path)?,
            None => (
                Self::scope_with_configurations(&request.config, configurations),
                Vec::new(),
            ),
        };

        // Step 3: Identity, sub-documents and merge
        let document = self.assemble(&request.config, &scoped)?;

        self.progress_reporter.report_completion(&format!(
            "VEX document {} generated with {} statement(s)",
            document.id,
            document.statements.len()
        ));

        Ok(VexResponse::new(document, skipped_packages))
    }

    /// Generates one merged VEX document from already-loaded configurations
    ///
    /// Products come from each configuration's own package and subpackages.
    ///
    /// # Errors
    /// Fails if the document identity cannot be computed or the merge fails.
    /// Nothing is returned on failure.
    pub fn from_package_configurations(
        &self,
        config: &VexConfig,
        configurations: Vec<PackageConfiguration>,
    ) -> Result<VexDocument> {
        let scoped = Self::scope_with_configurations(config, configurations);
        self.assemble(config, &scoped)
    }

    fn load_configurations(&self, paths: &[PathBuf]) -> Result<Vec<PackageConfiguration>> {
        self.progress_reporter.report(&format!(
            "📖 Loading {} package configuration(s)",
            paths.len()
        ));

        let configurations = paths
            .iter()
            .map(|path| self.configuration_reader.read_configuration(path))
            .collect::<Result<Vec<_>>>()?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} package configuration(s)",
            configurations.len()
        ));

        Ok(configurations)
    }

    fn scope_with_configurations(
        config: &VexConfig,
        configurations: Vec<PackageConfiguration>,
    ) -> Vec<ScopedConfiguration> {
        configurations
            .into_iter()
            .map(|configuration| {
                let products = ProductExtractor::from_configuration(&configuration, &config.distro);
                ScopedConfiguration::new(configuration, products)
            })
            .collect()
    }

    /// Scopes configurations to the SBOM package URLs naming them
    ///
    /// Configurations without a matching package URL are skipped with a warning.
    fn scope_with_sbom(
        &self,
        config: &VexConfig,
        configurations: Vec<PackageConfiguration>,
        sbom_path: &Path,
    ) -> Result<(Vec<ScopedConfiguration>, Vec<String>)> {
        self.progress_reporter
            .report(&format!("📖 Loading SBOM from: {}", sbom_path.display()));

        let sbom = self.sbom_reader.read_sbom(sbom_path)?;
        let purls = ProductExtractor::from_sbom(&sbom, &config.distro)?;

        self.progress_reporter.report(&format!(
            "✅ Found {} {} package URL(s) in SBOM",
            purls.len(),
            config.distro
        ));

        let mut scoped = Vec::new();
        let mut skipped = Vec::new();
        for configuration in configurations {
            let products = ProductExtractor::match_configuration(&purls, &configuration);
            if products.is_empty() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Package '{}' does not appear in the SBOM and was skipped.",
                    configuration.package.name
                ));
                skipped.push(configuration.package.name.clone());
            } else {
                scoped.push(ScopedConfiguration::new(configuration, products));
            }
        }

        if scoped.is_empty() {
            return Err(VexError::Validation {
                message: format!(
                    "none of the package configurations match a {} package in the SBOM",
                    config.distro
                ),
            }
            .into());
        }

        Ok((scoped, skipped))
    }

    fn assemble(&self, config: &VexConfig, scoped: &[ScopedConfiguration]) -> Result<VexDocument> {
        let document_id = DocumentIdentity::generate(scoped.iter().map(|s| &s.configuration))
            .context("generating document ID")?;

        let total = scoped.len();
        let documents = scoped
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.progress_reporter.report_progress(
                    index + 1,
                    total,
                    Some(&item.configuration.package.name),
                );
                VexAssembler::build_subdocument(item, Utc::now())
            })
            .collect();

        let options = VexAssembler::merge_options(config, document_id);
        self.merger
            .merge(&options, documents)
            .context("merging VEX documents")
    }
}
