//! Consignment service error types.

use std::net::SocketAddr;

use super::config::ConfigError;

/// Failure raised by a [`ConsignmentRepository`](crate::ports::ConsignmentRepository).
///
/// The in-memory registry never produces one; the variant exists so that a
/// storage backend with validation or capacity limits can report failures
/// without changing the port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Storage backend rejected or could not complete the write
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Service-level errors (bootstrap and transport).
///
/// All of these are fatal for the process.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Listening socket could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Reflection service could not be built from the descriptor set
    #[error("reflection service error: {0}")]
    Reflection(String),

    /// Serve loop terminated with a transport error
    #[error("server error: {0}")]
    Serve(#[from] tonic::transport::Error),
}
