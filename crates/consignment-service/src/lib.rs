//! # Consignment Service
//!
//! In-memory consignment registry exposed over gRPC.
//!
//! ## Purpose
//!
//! Accepts a consignment (a caller-supplied shipment record), appends it to
//! an append-only registry held for the lifetime of the process, and echoes
//! it back with `created = true`.
//!
//! ## Architecture
//!
//! ```text
//! tonic transport ──→ ShippingHandler (rpc/) ──→ ConsignmentRepository (port)
//!                          │                              │
//!                          │                  InMemoryConsignmentRepository
//!                          │                     RwLock<Vec<Consignment>>
//!                          ↓
//!                  Response { created, consignment }
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Append-only, size +1 per create | `adapters/memory.rs` - `create()` |
//! | Order = lock acquisition order | `adapters/memory.rs` - write lock around `push` |
//! | Echo: response carries the stored value unchanged | `rpc/handler.rs` - `create_consignment()` |
//! | Errors are never swallowed | `adapters/error_conversions.rs` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use consignment_service::{ConsignmentService, InMemoryConsignmentRepository, ServiceConfig};
//!
//! let repository = Arc::new(InMemoryConsignmentRepository::new());
//! let service = ConsignmentService::new(ServiceConfig::from_env()?, repository);
//! let listener = service.bind().await?;
//! service
//!     .serve_with_shutdown(listener, async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod rpc;
pub mod service;

// Re-exports for public API
pub use adapters::InMemoryConsignmentRepository;
pub use domain::config::{ConfigError, ServiceConfig};
pub use domain::context::RequestContext;
pub use domain::entities::{Consignment, Container, Response};
pub use domain::errors::{RepositoryError, ServiceError};
pub use ports::inbound::ShippingApi;
pub use ports::outbound::ConsignmentRepository;
pub use rpc::ShippingHandler;
pub use service::ConsignmentService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
