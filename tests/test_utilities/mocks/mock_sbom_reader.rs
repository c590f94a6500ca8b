use melange_vex::prelude::*;
use std::path::Path;

/// Mock SbomReader returning a fixed SBOM, or failing when none is set
#[derive(Default)]
pub struct MockSbomReader {
    sbom: Option<SpdxDocument>,
}

impl MockSbomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(json: &str) -> Self {
        Self {
            sbom: Some(serde_json::from_str(json).unwrap()),
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<SpdxDocument> {
        self.sbom.clone().ok_or_else(|| {
            VexError::SbomRead {
                path: path.to_path_buf(),
                details: "not found".to_string(),
            }
            .into()
        })
    }
}
