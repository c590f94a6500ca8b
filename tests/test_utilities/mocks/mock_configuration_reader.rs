use melange_vex::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ConfigurationReader serving in-memory YAML documents by path
#[derive(Default)]
pub struct MockConfigurationReader {
    documents: HashMap<PathBuf, String>,
}

impl MockConfigurationReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yaml(mut self, path: &str, yaml: &str) -> Self {
        self.documents.insert(PathBuf::from(path), yaml.to_string());
        self
    }
}

impl ConfigurationReader for MockConfigurationReader {
    fn read_configuration(&self, path: &Path) -> Result<PackageConfiguration> {
        let yaml = self.documents.get(path).ok_or_else(|| VexError::ConfigurationRead {
            path: path.to_path_buf(),
            details: "not found".to_string(),
        })?;

        PackageConfiguration::from_yaml(yaml).map_err(|e| {
            VexError::ConfigurationParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
