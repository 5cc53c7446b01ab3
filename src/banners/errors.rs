//! Record store error types.

use thiserror::Error;

/// Result type for store operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the record store.
///
/// "Not found" is the only domain error; malformed input is rejected by the
/// HTTP layer before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No banner with the requested id exists
    #[error("item not found")]
    NotFound,
}
