/// Mock implementations for testing
mod mock_configuration_reader;
mod mock_document_merger;
mod mock_progress_reporter;
mod mock_sbom_reader;

pub use mock_configuration_reader::MockConfigurationReader;
pub use mock_document_merger::MockDocumentMerger;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_reader::MockSbomReader;
