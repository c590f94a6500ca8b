use crate::vex_generation::domain::VexDocument;

/// VexResponse - Internal response DTO from the VEX generation use case
#[derive(Debug, Clone)]
pub struct VexResponse {
    /// The merged OpenVEX document
    pub document: VexDocument,
    /// Packages left out because no SBOM package URL matched them
    pub skipped_packages: Vec<String>,
}

impl VexResponse {
    pub fn new(document: VexDocument, skipped_packages: Vec<String>) -> Self {
        Self {
            document,
            skipped_packages,
        }
    }
}
