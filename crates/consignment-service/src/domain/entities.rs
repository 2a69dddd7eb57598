//! Consignment entities.
//!
//! The in-process representation is the prost-generated message types. The
//! core never inspects their fields: a consignment is stored and echoed
//! exactly as received, without an assigned identifier, deduplication or
//! validation.

pub use crate::rpc::proto::{Consignment, Container, Response};

impl Response {
    /// Acknowledgment for a consignment that has been appended to the registry.
    pub fn created(consignment: Consignment) -> Self {
        Self {
            created: true,
            consignment: Some(consignment),
        }
    }
}
