/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the application core
/// uses to reach the file system, the merge collaborator and the console.
pub mod outbound;
