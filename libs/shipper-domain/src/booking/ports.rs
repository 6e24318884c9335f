//! Port trait for the Booking Service
//!
//! This module defines the trait that abstracts the booking coordinator. The
//! HTTP layer is generic over it, while the concrete `BookingService` in
//! `service.rs` provides the implementation.

use std::future::Future;

use crate::booking::entity::{BookingResult, Consignment};
use crate::booking::error::BookingError;

/// Port trait for booking operations
pub trait BookingServicePort: Send + Sync {
    /// Book a consignment onto an available vessel and store it
    ///
    /// # Errors
    ///
    /// - `BookingError::InvalidInput` / `VesselAlreadyAssigned` if the consignment is malformed
    /// - `BookingError::LookupFailed`, `LookupTimedOut` or `NoVesselAvailable` if no vessel was obtained
    /// - `BookingError::StoreFailed` if the repository rejected the record
    fn book(
        &self,
        consignment: Consignment,
    ) -> impl Future<Output = Result<BookingResult, BookingError>> + Send;

    /// List every stored consignment in insertion order
    fn list_all(&self) -> impl Future<Output = Result<Vec<Consignment>, BookingError>> + Send;
}
