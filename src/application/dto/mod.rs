/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod vex_request;
mod vex_response;

pub use vex_request::{VexRequest, VexRequestBuilder};
pub use vex_response::VexResponse;
