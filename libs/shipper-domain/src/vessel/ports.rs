//! Port for the external vessel-allocation service

use std::future::Future;

use crate::booking::BookingError;
use crate::vessel::entity::{VesselAssignment, VesselQuery};

/// Port for vessel lookups
///
/// The booking coordinator depends only on this contract, not on how the
/// collaborator is located or reached. Implementations must:
/// - Issue exactly one request per call
/// - Report "nothing matches" as `BookingError::NoVesselAvailable`
/// - Convert transport errors to `BookingError::LookupFailed` (or `LookupTimedOut`)
pub trait VesselLookup: Send + Sync {
    /// Find a vessel that can carry `query.max_weight` across `query.capacity` containers
    ///
    /// # Errors
    ///
    /// - `BookingError::NoVesselAvailable` if no vessel matches
    /// - `BookingError::LookupFailed` if the collaborator failed or was unreachable
    fn find_available(
        &self,
        query: &VesselQuery,
    ) -> impl Future<Output = Result<VesselAssignment, BookingError>> + Send;
}
