//! `ShippingService` adapter.
//!
//! Receives `CreateConsignment` calls from tonic, forwards the payload to the
//! repository unchanged and maps the result onto the generated `Response`.

use std::sync::Arc;
use std::time::Duration;

use consignment_telemetry::{
    metric_inc, time_histogram, CONSIGNMENTS_CREATED, CONSIGNMENT_CREATE_DURATION,
    CONSIGNMENT_CREATE_FAILURES,
};
use tonic::metadata::MetadataMap;
use tonic::{Request, Status};
use tracing::{debug, warn};

use super::proto::shipping_service_server::ShippingService;
use crate::domain::{Consignment, RepositoryError, RequestContext, Response};
use crate::ports::inbound::ShippingApi;
use crate::ports::outbound::ConsignmentRepository;

/// gRPC adapter over a [`ConsignmentRepository`].
///
/// Holds the repository through the trait only, so any backend (including a
/// trait object) can be plugged in.
pub struct ShippingHandler<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ConsignmentRepository + ?Sized> ShippingHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ConsignmentRepository + ?Sized> ShippingApi for ShippingHandler<R> {
    fn create_consignment(
        &self,
        _ctx: &RequestContext,
        consignment: Consignment,
    ) -> Result<Response, RepositoryError> {
        let _timer = time_histogram!(CONSIGNMENT_CREATE_DURATION);

        match self.repository.create(consignment) {
            Ok(stored) => {
                metric_inc!(CONSIGNMENTS_CREATED);
                Ok(Response::created(stored))
            }
            Err(e) => {
                metric_inc!(CONSIGNMENT_CREATE_FAILURES);
                Err(e)
            }
        }
    }
}

#[tonic::async_trait]
impl<R: ConsignmentRepository + ?Sized> ShippingService for ShippingHandler<R> {
    async fn create_consignment(
        &self,
        request: Request<Consignment>,
    ) -> Result<tonic::Response<Response>, Status> {
        let ctx = context_from_metadata(request.metadata());
        let remote = request.remote_addr();
        let consignment = request.into_inner();

        debug!(
            remote = ?remote,
            deadline_set = ctx.deadline().is_some(),
            containers = consignment.containers.len(),
            "CreateConsignment"
        );

        match ShippingApi::create_consignment(self, &ctx, consignment) {
            Ok(response) => Ok(tonic::Response::new(response)),
            Err(e) => {
                warn!(error = %e, "CreateConsignment failed");
                Err(e.into())
            }
        }
    }
}

/// Build the request context from the `grpc-timeout` header, if present.
pub(crate) fn context_from_metadata(metadata: &MetadataMap) -> RequestContext {
    metadata
        .get("grpc-timeout")
        .and_then(|value| value.to_str().ok())
        .and_then(parse_grpc_timeout)
        .map(RequestContext::with_timeout)
        .unwrap_or_else(RequestContext::background)
}

/// Parse a `grpc-timeout` value: up to 8 ASCII digits followed by one of
/// `H M S m u n`.
fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    if value.len() < 2 || !value.is_ascii() {
        return None;
    }
    let (digits, unit) = value.split_at(value.len() - 1);
    if digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let amount: u64 = digits.parse().ok()?;

    let duration = match unit {
        "H" => Duration::from_secs(amount * 60 * 60),
        "M" => Duration::from_secs(amount * 60),
        "S" => Duration::from_secs(amount),
        "m" => Duration::from_millis(amount),
        "u" => Duration::from_micros(amount),
        "n" => Duration::from_nanos(amount),
        _ => return None,
    };
    Some(duration)
}
