//! In-Memory Consignment Repository Implementation
//!
//! This module implements the `ConsignmentRepository` trait over an ordered
//! in-process collection. Every read and write goes through a single async
//! mutex, so concurrent bookings never lose or reorder a stored record.

use std::sync::Arc;

use shipper_domain::{BookingError, Consignment, ConsignmentRepository};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// In-memory implementation of the ConsignmentRepository port
///
/// Records are kept in insertion order. Cloning the repository yields another
/// handle onto the same collection.
///
/// ## Error Handling
///
/// Consignments without a vessel binding are refused with
/// `BookingError::StoreFailed`; nothing else fails.
#[derive(Clone, Default)]
pub struct InMemoryConsignmentRepository {
    consignments: Arc<Mutex<Vec<Consignment>>>,
}

impl InMemoryConsignmentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with existing records
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipper_memory::InMemoryConsignmentRepository;
    ///
    /// let repo = InMemoryConsignmentRepository::with_consignments(Vec::new());
    /// ```
    pub fn with_consignments(consignments: Vec<Consignment>) -> Self {
        Self {
            consignments: Arc::new(Mutex::new(consignments)),
        }
    }

    /// Number of stored consignments
    pub async fn len(&self) -> usize {
        self.consignments.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.consignments.lock().await.is_empty()
    }
}

impl ConsignmentRepository for InMemoryConsignmentRepository {
    #[instrument(skip(self, consignment), fields(weight = consignment.weight(), containers = consignment.container_count()))]
    fn create(
        &self,
        consignment: Consignment,
    ) -> impl std::future::Future<Output = Result<Consignment, BookingError>> + Send {
        let consignments = self.consignments.clone();

        async move {
            let Some(vessel_id) = consignment.vessel_id().cloned() else {
                warn!("Refusing to store consignment without a vessel");
                return Err(BookingError::store_failed(
                    "Consignment has no vessel assignment",
                ));
            };

            let mut guard = consignments.lock().await;
            guard.push(consignment.clone());
            debug!(vessel_id = %vessel_id, stored = guard.len(), "Stored consignment");

            Ok(consignment)
        }
    }

    #[instrument(skip(self))]
    fn get_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Consignment>, BookingError>> + Send {
        let consignments = self.consignments.clone();

        async move {
            let snapshot = consignments.lock().await.clone();
            debug!(count = snapshot.len(), "Listed consignments");
            Ok(snapshot)
        }
    }
}
