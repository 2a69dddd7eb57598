//! Domain types for the consignment service.
//!
//! Entities, the request context, configuration and error types.

pub mod config;
pub mod context;
pub mod entities;
pub mod errors;

// Re-exports for convenience
pub use config::{ConfigError, ServiceConfig};
pub use context::RequestContext;
pub use entities::{Consignment, Container, Response};
pub use errors::{RepositoryError, ServiceError};
