//! Adapters for the consignment service.
//!
//! Infrastructure implementations of the ports: the in-memory registry and
//! the mapping of domain errors onto gRPC status codes.

pub mod error_conversions;
pub mod memory;

pub use memory::InMemoryConsignmentRepository;
