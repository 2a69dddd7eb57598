//! # Concurrency Flows
//!
//! Many callers hitting one registry, over gRPC and in-process. Only counts
//! and set membership are asserted; the stored order is whatever order the
//! writers acquired the lock in.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use consignment_service::{
        ConsignmentRepository, InMemoryConsignmentRepository, RequestContext, ShippingApi,
        ShippingHandler,
    };

    use crate::fixtures::{consignment, random_consignment, spawn_server};

    #[tokio::test]
    async fn test_two_concurrent_calls_both_stored() {
        let repo = Arc::new(InMemoryConsignmentRepository::new());
        let server = spawn_server(Arc::clone(&repo), true).await;
        let client = server.client().await;

        let mut first = client.clone();
        let mut second = client.clone();
        let a = consignment("A");
        let b = consignment("B");

        let (ra, rb) = tokio::join!(
            first.create_consignment(a.clone()),
            second.create_consignment(b.clone())
        );
        assert!(ra.unwrap().into_inner().created);
        assert!(rb.unwrap().into_inner().created);

        let stored = repo.snapshot();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored.iter().filter(|c| **c == a).count(), 1);
        assert_eq!(stored.iter().filter(|c| **c == b).count(), 1);

        server.stop().await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_hundred_concurrent_grpc_calls() {
        const CALLS: usize = 100;

        let repo = Arc::new(InMemoryConsignmentRepository::new());
        let server = spawn_server(Arc::clone(&repo), true).await;
        let client = server.client().await;

        let tasks: Vec<_> = (0..CALLS)
            .map(|i| {
                let mut client = client.clone();
                tokio::spawn(async move {
                    let input = random_consignment(&format!("grpc-{i}"), i % 5);
                    let response = client
                        .create_consignment(input.clone())
                        .await
                        .expect("create succeeds")
                        .into_inner();
                    assert!(response.created);
                    assert_eq!(response.consignment, Some(input));
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let stored_ids: HashSet<String> = repo.snapshot().into_iter().map(|c| c.id).collect();
        let submitted_ids: HashSet<String> = (0..CALLS).map(|i| format!("grpc-{i}")).collect();
        assert_eq!(repo.len(), CALLS);
        assert_eq!(stored_ids, submitted_ids);

        server.stop().await.unwrap();
    }

    #[test]
    fn test_threads_through_handler_lose_no_updates() {
        const THREADS: usize = 16;
        const PER_THREAD: usize = 200;

        let repo = Arc::new(InMemoryConsignmentRepository::new());
        let handler = Arc::new(ShippingHandler::new(Arc::clone(&repo)));

        std::thread::scope(|s| {
            for t in 0..THREADS {
                let handler = Arc::clone(&handler);
                s.spawn(move || {
                    let ctx = RequestContext::background();
                    for m in 0..PER_THREAD {
                        let response = ShippingApi::create_consignment(
                            handler.as_ref(),
                            &ctx,
                            consignment(&format!("{t}:{m}")),
                        )
                        .unwrap();
                        assert!(response.created);
                    }
                });
            }
        });

        let stored = repo.snapshot();
        assert_eq!(stored.len(), THREADS * PER_THREAD);

        let unique: HashSet<String> = stored.into_iter().map(|c| c.id).collect();
        assert_eq!(unique.len(), THREADS * PER_THREAD, "no duplicates");
    }

    #[test]
    fn test_trait_object_repository_under_contention() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 50;

        let concrete = Arc::new(InMemoryConsignmentRepository::new());
        let repo: Arc<dyn ConsignmentRepository> = concrete.clone();

        std::thread::scope(|s| {
            for t in 0..THREADS {
                let repo = Arc::clone(&repo);
                s.spawn(move || {
                    for m in 0..PER_THREAD {
                        repo.create(consignment(&format!("dyn-{t}-{m}"))).unwrap();
                    }
                });
            }
        });

        assert_eq!(concrete.len(), THREADS * PER_THREAD);
    }

    #[tokio::test]
    async fn test_metrics_track_grpc_creates() {
        consignment_telemetry::register_metrics().unwrap();
        let before = consignment_telemetry::CONSIGNMENTS_CREATED.get();

        let repo = Arc::new(InMemoryConsignmentRepository::new());
        let server = spawn_server(Arc::clone(&repo), true).await;
        let mut client = server.client().await;
        for i in 0..3 {
            client
                .create_consignment(consignment(&format!("metered-{i}")))
                .await
                .unwrap();
        }

        // Other tests share the global counters, so only a lower bound holds
        assert!(consignment_telemetry::CONSIGNMENTS_CREATED.get() >= before + 3);

        let text = consignment_telemetry::encode_metrics().unwrap();
        assert!(text.contains("consignments_created_total"));
        assert!(text.contains("consignment_create_duration_seconds"));
        assert!(text.contains("consignment_registry_size"));

        server.stop().await.unwrap();
    }
}
