//! melange-vex - OpenVEX document generation for melange packages
//!
//! This library turns melange package configurations (their `secfixes` and
//! `advisories` sections) into a single OpenVEX document, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`vex_generation`): Statement building, reconciliation and document identity
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use melange_vex::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case
//! let use_case = GenerateVexUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     OpenVexMerger::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = VexRequest::builder()
//!     .configuration_path("zlib.yaml")
//!     .config(VexConfig::new("wolfi", "Wolfi", "Distributor"))
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = OpenVexFormatter::new().format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod vex_generation;

pub use shared::Result;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::OpenVexFormatter;
    pub use crate::adapters::outbound::merge::OpenVexMerger;
    pub use crate::application::dto::{VexRequest, VexResponse};
    pub use crate::application::use_cases::GenerateVexUseCase;
    pub use crate::ports::outbound::{
        ConfigurationReader, DocumentMerger, OutputPresenter, ProgressReporter, SbomReader,
        VexFormatter,
    };
    pub use crate::shared::error::VexError;
    pub use crate::shared::Result;
    pub use crate::vex_generation::domain::{
        Justification, MergeOptions, PackageConfiguration, SpdxDocument, Statement, Status,
        VexConfig, VexDocument,
    };
    pub use crate::vex_generation::policies::AdvisoryPrecedence;
    pub use crate::vex_generation::services::{
        DocumentIdentity, ProductExtractor, StatementBuilder, StatementReconciler, VexAssembler,
    };
}
