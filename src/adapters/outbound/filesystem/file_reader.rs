use crate::ports::outbound::{ConfigurationReader, SbomReader};
use crate::shared::error::VexError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use crate::vex_generation::domain::{PackageConfiguration, SpdxDocument};
use std::path::Path;

/// FileSystemReader adapter for reading input documents from the file system
///
/// This adapter implements both ConfigurationReader and SbomReader ports.
/// Every read goes through the symlink, file type and size checks.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationReader for FileSystemReader {
    fn read_configuration(&self, path: &Path) -> Result<PackageConfiguration> {
        let content = read_regular_file(path, "package configuration").map_err(|e| {
            VexError::ConfigurationRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        PackageConfiguration::from_yaml(&content).map_err(|e| {
            VexError::ConfigurationParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<SpdxDocument> {
        let content = read_regular_file(path, "SBOM").map_err(|e| VexError::SbomRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            VexError::SbomParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
