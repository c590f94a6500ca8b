use crate::shared::Result;
use crate::vex_generation::domain::SpdxDocument;
use std::path::Path;

/// SbomReader port for loading SPDX SBOM documents
pub trait SbomReader {
    /// Reads and parses an SPDX JSON SBOM
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid SPDX JSON.
    /// Failures are not retried.
    fn read_sbom(&self, path: &Path) -> Result<SpdxDocument>;
}
