//! Ports (trait definitions) for consignment storage
//!
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::booking::{BookingError, Consignment};

/// Port for storage operations
///
/// This trait abstracts away the storage backend (in-memory, database, etc.).
/// Implementations must:
/// - Preserve insertion order for `get_all`
/// - Be safe under concurrent `create` calls
/// - Convert backend errors to `BookingError::StoreFailed`
pub trait ConsignmentRepository: Send + Sync {
    /// Append a consignment to the store and return the stored record
    ///
    /// # Errors
    ///
    /// Returns `BookingError::StoreFailed` if the record could not be written
    fn create(
        &self,
        consignment: Consignment,
    ) -> impl Future<Output = Result<Consignment, BookingError>> + Send;

    /// Return every stored consignment in insertion order
    ///
    /// # Errors
    ///
    /// Returns `BookingError::StoreFailed` if the backend could not be read
    fn get_all(&self) -> impl Future<Output = Result<Vec<Consignment>, BookingError>> + Send;
}
