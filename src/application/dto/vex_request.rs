use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::VexConfig;
use std::path::PathBuf;

/// VexRequest - Internal request DTO for the VEX generation use case
#[derive(Debug, Clone)]
pub struct VexRequest {
    /// Package configuration files, one sub-document each
    pub configuration_paths: Vec<PathBuf>,
    /// SPDX SBOM whose package URLs scope the products, if any
    pub sbom_path: Option<PathBuf>,
    /// Distribution and author metadata
    pub config: VexConfig,
}

impl VexRequest {
    pub fn builder() -> VexRequestBuilder {
        VexRequestBuilder::default()
    }
}

/// Builder for [`VexRequest`]
///
/// `build()` checks that at least one configuration is given and that the
/// distribution is not blank.
#[derive(Debug, Default)]
pub struct VexRequestBuilder {
    configuration_paths: Vec<PathBuf>,
    sbom_path: Option<PathBuf>,
    config: Option<VexConfig>,
}

impl VexRequestBuilder {
    pub fn configuration_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.configuration_paths.push(path.into());
        self
    }

    pub fn configuration_paths(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.configuration_paths.extend(paths);
        self
    }

    pub fn sbom_path(mut self, path: Option<PathBuf>) -> Self {
        self.sbom_path = path;
        self
    }

    pub fn config(mut self, config: VexConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<VexRequest> {
        if self.configuration_paths.is_empty() {
            return Err(VexError::Validation {
                message: "at least one package configuration is required".to_string(),
            }
            .into());
        }

        let config = self.config.ok_or_else(|| VexError::Validation {
            message: "VEX configuration is required".to_string(),
        })?;

        if config.distro.trim().is_empty() {
            return Err(VexError::Validation {
                message: "distro must not be empty".to_string(),
            }
            .into());
        }

        Ok(VexRequest {
            configuration_paths: self.configuration_paths,
            sbom_path: self.sbom_path,
            config,
        })
    }
}
