/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, merge routine, console, etc.).
pub mod configuration_reader;
pub mod document_merger;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_reader;

pub use configuration_reader::ConfigurationReader;
pub use document_merger::DocumentMerger;
pub use formatter::VexFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::SbomReader;
