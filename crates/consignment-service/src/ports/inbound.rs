//! # Inbound Port - ShippingApi
//!
//! Transport-independent form of `ShippingService/CreateConsignment`.

use crate::domain::{Consignment, RepositoryError, RequestContext, Response};

/// Primary API of the shipping service.
///
/// Implemented by [`ShippingHandler`](crate::rpc::ShippingHandler); the gRPC
/// trait implementation is a thin wrapper over this.
pub trait ShippingApi: Send + Sync {
    /// Store a consignment and acknowledge it.
    ///
    /// `ctx` is accepted but not observed: a create that has begun always
    /// runs to completion.
    ///
    /// # Errors
    /// Whatever the underlying repository reports, unchanged. No response is
    /// produced in that case.
    fn create_consignment(
        &self,
        ctx: &RequestContext,
        consignment: Consignment,
    ) -> Result<Response, RepositoryError>;
}
