//! Shared fixtures for integration tests and benchmarks.

use std::net::SocketAddr;
use std::sync::Arc;

use consignment_service::rpc::proto::shipping_service_client::ShippingServiceClient;
use consignment_service::{
    Consignment, ConsignmentRepository, ConsignmentService, Container, ServiceConfig,
    ServiceError,
};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::transport::Channel;

/// A server running on a loopback ephemeral port.
pub struct RunningServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), ServiceError>>,
}

impl RunningServer {
    /// Endpoint URI for tonic clients.
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Connect a ShippingService client.
    pub async fn client(&self) -> ShippingServiceClient<Channel> {
        ShippingServiceClient::connect(self.endpoint())
            .await
            .expect("connect to test server")
    }

    /// Signal shutdown and wait for the serve loop to return.
    pub async fn stop(mut self) -> Result<(), ServiceError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("server task panicked")
    }
}

/// Start a server over `repository` with the given reflection setting.
pub async fn spawn_server<R>(repository: Arc<R>, reflection: bool) -> RunningServer
where
    R: ConsignmentRepository + ?Sized,
{
    let config = ServiceConfig {
        reflection,
        ..ServiceConfig::ephemeral()
    };
    let service = ConsignmentService::new(config, repository);
    let listener = service.bind().await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(service.serve_with_shutdown(listener, async {
        let _ = shutdown_rx.await;
    }));

    RunningServer {
        addr,
        shutdown: Some(shutdown_tx),
        handle,
    }
}

/// A consignment with one container, identified by `id`.
pub fn consignment(id: &str) -> Consignment {
    Consignment {
        id: id.to_string(),
        description: format!("Shipment {id}"),
        weight: 2_500,
        containers: vec![Container {
            id: format!("{id}-c0"),
            customer_id: "customer-1".into(),
            origin: "Felixstowe".into(),
            user_id: "user-1".into(),
        }],
        vessel_id: "vessel-001".into(),
    }
}

/// A consignment with `containers` randomly labelled containers.
pub fn random_consignment(id: &str, containers: usize) -> Consignment {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    Consignment {
        id: id.to_string(),
        description: format!("Random shipment {id}"),
        weight: rng.gen_range(1..100_000),
        containers: (0..containers)
            .map(|i| Container {
                id: format!("{id}-c{i}"),
                customer_id: format!("customer-{}", rng.gen_range(0..1_000)),
                origin: "Singapore".into(),
                user_id: format!("user-{}", rng.gen_range(0..1_000)),
            })
            .collect(),
        vessel_id: format!("vessel-{}", rng.gen_range(0..50)),
    }
}
