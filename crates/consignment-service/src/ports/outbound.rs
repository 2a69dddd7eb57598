//! # Outbound Port - ConsignmentRepository
//!
//! Storage capability the shipping service depends on. The adapter only ever
//! sees this trait, so a persistent backend can replace the in-memory
//! registry without touching it.

use crate::domain::{Consignment, RepositoryError};

/// Something that can durably accept a consignment.
///
/// # Thread Safety
///
/// Implementations are shared across concurrently running requests and must
/// serialize their own writes.
pub trait ConsignmentRepository: Send + Sync + 'static {
    /// Append `consignment` and return the stored value.
    ///
    /// The returned value must be identical to the input, and must have
    /// been stored before this returns.
    ///
    /// # Errors
    /// `RepositoryError::Storage` if the backend cannot complete the write.
    fn create(&self, consignment: Consignment) -> Result<Consignment, RepositoryError>;
}

