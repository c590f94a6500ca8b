//! VEX generation core: domain model, the advisory precedence policy and
//! the services that turn package configurations into VEX statements.
pub mod domain;
pub mod policies;
pub mod services;
