//! Conversions from domain errors to gRPC status values.

use tonic::Status;

use crate::domain::RepositoryError;

impl From<RepositoryError> for Status {
    fn from(e: RepositoryError) -> Self {
        match e {
            // Generic operation failure, the same code a plain handler error gets
            RepositoryError::Storage(message) => Status::unknown(message),
        }
    }
}
