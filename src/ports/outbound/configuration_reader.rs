use crate::shared::Result;
use crate::vex_generation::domain::PackageConfiguration;
use std::path::Path;

/// ConfigurationReader port for loading package build configurations
///
/// This port abstracts where melange configurations come from and how
/// their YAML is parsed.
pub trait ConfigurationReader {
    /// Reads and parses one package configuration
    ///
    /// # Arguments
    /// * `path` - Path to the configuration YAML file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid package configuration
    fn read_configuration(&self, path: &Path) -> Result<PackageConfiguration>;
}
