use crate::ports::outbound::VexFormatter;
use crate::shared::Result;
use crate::vex_generation::domain::VexDocument;

/// OpenVexFormatter adapter for generating OpenVEX JSON
pub struct OpenVexFormatter;

impl OpenVexFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenVexFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl VexFormatter for OpenVexFormatter {
    fn format(&self, document: &VexDocument) -> Result<String> {
        serde_json::to_string_pretty(document).map_err(Into::into)
    }
}
