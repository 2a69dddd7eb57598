//! Consignment service - server bootstrap.
//!
//! Binds the listening socket, mounts `ShippingService` (and reflection when
//! enabled) on a tonic server, and serves until a shutdown signal resolves.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{error, info};

use crate::domain::config::ServiceConfig;
use crate::domain::errors::ServiceError;
use crate::ports::outbound::ConsignmentRepository;
use crate::rpc::proto::shipping_service_server::ShippingServiceServer;
use crate::rpc::{ShippingHandler, FILE_DESCRIPTOR_SET};

/// gRPC server for the consignment registry.
///
/// Owns the configuration and a handle to the repository; the repository is
/// supplied by the caller so tests can build isolated instances.
pub struct ConsignmentService<R: ?Sized> {
    config: ServiceConfig,
    repository: Arc<R>,
}

impl<R: ConsignmentRepository + ?Sized> ConsignmentService<R> {
    /// Create a new service over `repository`.
    pub fn new(config: ServiceConfig, repository: Arc<R>) -> Self {
        Self { config, repository }
    }

    /// Bind the configured listen address.
    ///
    /// # Errors
    /// `ServiceError::Bind` if the socket cannot be bound. Callers treat this
    /// as fatal.
    pub async fn bind(&self) -> Result<TcpListener, ServiceError> {
        let addr = self.config.listen_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|source| ServiceError::Bind { addr, source })
    }

    /// Serve on `listener` until `signal` resolves.
    ///
    /// In-flight calls are allowed to finish once the signal fires.
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        signal: F,
    ) -> Result<(), ServiceError>
    where
        F: Future<Output = ()> + Send,
    {
        let local_addr = listener
            .local_addr()
            .unwrap_or_else(|_| self.config.listen_addr());

        let reflection = if self.config.reflection {
            let service = tonic_reflection::server::Builder::configure()
                .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
                .build_v1()
                .map_err(|e| ServiceError::Reflection(e.to_string()))?;
            Some(service)
        } else {
            None
        };

        let handler = ShippingHandler::new(Arc::clone(&self.repository));

        let router = Server::builder()
            .add_service(ShippingServiceServer::new(handler))
            .add_optional_service(reflection);

        info!(
            addr = %local_addr,
            reflection = self.config.reflection,
            "Running on port: {}",
            local_addr.port()
        );

        let result = router
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
            .await;

        match result {
            Ok(()) => {
                info!(addr = %local_addr, "Consignment service stopped");
                Ok(())
            }
            Err(e) => {
                error!(addr = %local_addr, error = %e, "Serve loop failed");
                Err(ServiceError::Serve(e))
            }
        }
    }
}
