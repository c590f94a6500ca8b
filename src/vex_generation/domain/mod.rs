pub mod document;
pub mod package_configuration;
pub mod spdx;
pub mod statement;
pub mod status;
pub mod yaml_node;

pub use document::{MergeOptions, VexConfig, VexDocument};
pub use package_configuration::{
    Advisories, AdvisoryContent, Package, PackageConfiguration, Secfixes, Subpackage,
};
pub use spdx::{ExternalRef, SpdxDocument, SpdxPackage};
pub use statement::{AdvisoryStatements, SecfixesStatements, Statement};
pub use status::{Justification, Status};
pub use yaml_node::YamlNode;
