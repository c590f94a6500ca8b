use crate::shared::Result;
use crate::vex_generation::domain::VexDocument;

/// VexFormatter port for serializing the final VEX document
pub trait VexFormatter {
    /// Formats a VEX document for output
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &VexDocument) -> Result<String>;
}
