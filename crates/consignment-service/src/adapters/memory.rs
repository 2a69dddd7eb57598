//! In-memory consignment registry.
//!
//! An ordered, append-only `Vec<Consignment>` behind a `parking_lot::RwLock`.
//! Every create takes the write lock for exactly one `push`, so writers are
//! serialized and the stored order is the order in which they acquired the
//! lock. Contents live as long as the process.

use consignment_telemetry::REGISTRY_SIZE;
use parking_lot::RwLock;

use crate::domain::{Consignment, RepositoryError};
use crate::ports::outbound::ConsignmentRepository;

/// Append-only consignment registry held in process memory.
///
/// Construct one per server (or per test) and share it by `Arc`; there is no
/// global instance.
#[derive(Debug, Default)]
pub struct InMemoryConsignmentRepository {
    consignments: RwLock<Vec<Consignment>>,
}

impl InMemoryConsignmentRepository {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored consignments.
    pub fn len(&self) -> usize {
        self.consignments.read().len()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.consignments.read().is_empty()
    }

    /// Copy of the stored sequence, in insertion order.
    pub fn snapshot(&self) -> Vec<Consignment> {
        self.consignments.read().clone()
    }
}

impl ConsignmentRepository for InMemoryConsignmentRepository {
    fn create(&self, consignment: Consignment) -> Result<Consignment, RepositoryError> {
        let size = {
            let mut consignments = self.consignments.write();
            consignments.push(consignment.clone());
            let size = consignments.len();
            // Published under the guard so concurrent writers report in order
            REGISTRY_SIZE.set(i64::try_from(size).unwrap_or(i64::MAX));
            size
        };

        tracing::trace!(size, "consignment appended");

        Ok(consignment)
    }
}
