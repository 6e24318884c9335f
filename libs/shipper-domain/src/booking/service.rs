//! Booking service - Business logic orchestration
//!
//! This module contains the booking coordinator. It derives a vessel query
//! from a consignment, binds the consignment to the vessel the lookup returns
//! and hands the bound record to the repository.

use std::future::Future;
use std::time::Duration;

use super::{BookingError, BookingResult, BookingServicePort, Consignment};
use crate::storage::ConsignmentRepository;
use crate::vessel::{VesselAssignment, VesselLookup, VesselQuery};

/// Configuration for the booking service
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Upper bound on a single vessel lookup (default: 5s)
    pub lookup_timeout: Duration,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(5),
        }
    }
}

/// Coordinator that books consignments onto vessels
///
/// This service encapsulates the booking rules:
/// - Rejects degenerate consignments before any lookup is issued
/// - Performs exactly one vessel lookup per booking, bounded by `lookup_timeout`
/// - Binds the vessel before the record reaches the repository
/// - Stores nothing when any step fails
///
/// ## Static Dispatch
///
/// The service is generic over the repository and the vessel lookup. Alternate
/// backends are chosen at construction time without touching this code.
///
pub struct BookingService<R, V> {
    repository: R,
    vessels: V,
    config: BookingConfig,
}

impl<R, V> BookingService<R, V>
where
    R: ConsignmentRepository,
    V: VesselLookup,
{
    /// Create a new BookingService with the given collaborators and configuration
    pub fn new(repository: R, vessels: V, config: BookingConfig) -> Self {
        Self {
            repository,
            vessels,
            config,
        }
    }

    /// Create a new BookingService with default configuration
    pub fn with_collaborators(repository: R, vessels: V) -> Self {
        Self::new(repository, vessels, BookingConfig::default())
    }

    /// Book a consignment onto an available vessel
    ///
    /// This is the main entry point for bookings. It:
    /// 1. Validates the consignment
    /// 2. Derives a `VesselQuery` and looks up a vessel
    /// 3. Binds the consignment to the returned vessel
    /// 4. Persists the bound consignment via the repository
    ///
    /// Dropping the returned future before it completes cancels the lookup and
    /// leaves the store untouched.
    ///
    /// # Errors
    ///
    /// - `BookingError::InvalidInput` / `VesselAlreadyAssigned` if validation fails
    /// - `BookingError::LookupFailed`, `LookupTimedOut`, `NoVesselAvailable` from the lookup
    /// - `BookingError::StoreFailed` if the repository fails
    ///
    pub async fn book(&self, mut consignment: Consignment) -> Result<BookingResult, BookingError> {
        consignment.validate()?;

        let query = consignment.vessel_query()?;
        let assignment = self.find_vessel(&query).await?;

        // Bind before storing so no stored record ever lacks a vessel
        consignment.assign_vessel(assignment.vessel_id)?;

        let stored = self.repository.create(consignment).await?;

        Ok(BookingResult::created(stored))
    }

    /// List every stored consignment in insertion order
    pub async fn list_all(&self) -> Result<Vec<Consignment>, BookingError> {
        self.repository.get_all().await
    }

    async fn find_vessel(&self, query: &VesselQuery) -> Result<VesselAssignment, BookingError> {
        let timeout = self.config.lookup_timeout;
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);

        let assignment = tokio::time::timeout(timeout, self.vessels.find_available(query))
            .await
            .map_err(|_| BookingError::lookup_timed_out(timeout_ms))??;

        if assignment.is_empty() {
            return Err(BookingError::no_vessel_available(format!(
                "No vessel for max weight {} and capacity {}",
                query.max_weight, query.capacity
            )));
        }

        Ok(assignment)
    }
}

impl<R, V> BookingServicePort for BookingService<R, V>
where
    R: ConsignmentRepository,
    V: VesselLookup,
{
    fn book(
        &self,
        consignment: Consignment,
    ) -> impl Future<Output = Result<BookingResult, BookingError>> + Send {
        BookingService::book(self, consignment)
    }

    fn list_all(&self) -> impl Future<Output = Result<Vec<Consignment>, BookingError>> + Send {
        BookingService::list_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Container;
    use crate::vessel::VesselId;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    // In-memory storage for testing
    #[derive(Clone, Default)]
    struct InMemoryStorage {
        records: Arc<Mutex<Vec<Consignment>>>,
        fail_writes: bool,
    }

    impl InMemoryStorage {
        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    impl ConsignmentRepository for InMemoryStorage {
        fn create(
            &self,
            consignment: Consignment,
        ) -> impl Future<Output = Result<Consignment, BookingError>> + Send {
            let records = self.records.clone();
            let fail_writes = self.fail_writes;

            async move {
                if fail_writes {
                    return Err(BookingError::store_failed("write rejected"));
                }
                records.lock().unwrap().push(consignment.clone());
                Ok(consignment)
            }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Consignment>, BookingError>> + Send {
            let records = self.records.clone();

            async move { Ok(records.lock().unwrap().clone()) }
        }
    }

    // Vessel lookup that replays scripted responses and records every query
    #[derive(Clone, Default)]
    struct ScriptedVessels {
        responses: Arc<Mutex<VecDeque<Result<VesselAssignment, BookingError>>>>,
        queries: Arc<Mutex<Vec<VesselQuery>>>,
        delay: Option<Duration>,
    }

    impl ScriptedVessels {
        fn returning(responses: Vec<Result<VesselAssignment, BookingError>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
                ..Self::default()
            }
        }

        fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn queries(&self) -> Vec<VesselQuery> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl VesselLookup for ScriptedVessels {
        fn find_available(
            &self,
            query: &VesselQuery,
        ) -> impl Future<Output = Result<VesselAssignment, BookingError>> + Send {
            self.queries.lock().unwrap().push(*query);
            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(BookingError::lookup_failed("no scripted response")));
            let delay = self.delay;

            async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                response
            }
        }
    }

    fn containers(n: usize) -> Vec<Container> {
        (0..n)
            .map(|i| Container {
                id: format!("c{}", i + 1),
                ..Container::default()
            })
            .collect()
    }

    fn vessel(id: &str, name: &str) -> Result<VesselAssignment, BookingError> {
        Ok(VesselAssignment::new(id, name))
    }

    #[tokio::test]
    async fn test_book_assigns_vessel_and_stores() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![vessel("V1", "Atlantic")]);
        let service = BookingService::with_collaborators(storage.clone(), vessels.clone());

        let result = service
            .book(Consignment::new("Grain", 1000, containers(2)))
            .await
            .unwrap();

        assert!(result.created);
        assert_eq!(
            result.consignment.vessel_id().map(VesselId::as_str),
            Some("V1")
        );
        assert_eq!(vessels.queries(), vec![VesselQuery::new(1000, 2)]);

        let listed = service.list_all().await.unwrap();
        assert_eq!(listed, vec![result.consignment]);
    }

    #[tokio::test]
    async fn test_lookup_error_stores_nothing() {
        let storage = InMemoryStorage::default();
        let vessels =
            ScriptedVessels::returning(vec![Err(BookingError::lookup_failed("no vessel"))]);
        let service = BookingService::with_collaborators(storage.clone(), vessels);

        let before = service.list_all().await.unwrap();
        let result = service
            .book(Consignment::new("Grain", 1000, containers(2)))
            .await;

        assert!(matches!(result, Err(BookingError::LookupFailed(_))));
        assert_eq!(service.list_all().await.unwrap(), before);
        assert_eq!(storage.len(), 0);
    }

    #[tokio::test]
    async fn test_empty_assignment_is_no_vessel_available() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![vessel("", "")]);
        let service = BookingService::with_collaborators(storage.clone(), vessels);

        let result = service
            .book(Consignment::new("Grain", 1000, containers(1)))
            .await;

        assert!(matches!(result, Err(BookingError::NoVesselAvailable(_))));
        assert_eq!(storage.len(), 0);
    }

    #[tokio::test]
    async fn test_invalid_consignment_skips_lookup() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![vessel("V1", "Atlantic")]);
        let service = BookingService::with_collaborators(storage.clone(), vessels.clone());

        let result = service.book(Consignment::new("Nothing", 1000, vec![])).await;

        assert!(matches!(result, Err(BookingError::InvalidInput(_))));
        assert!(vessels.queries().is_empty());
        assert_eq!(storage.len(), 0);
    }

    #[tokio::test]
    async fn test_prebooked_consignment_is_rejected() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![vessel("V2", "Pacific")]);
        let service = BookingService::with_collaborators(storage.clone(), vessels.clone());

        let consignment = Consignment::from_parts(
            "Grain".to_string(),
            1000,
            containers(1),
            Some(VesselId::new("V1")),
        );
        let result = service.book(consignment).await;

        assert!(matches!(result, Err(BookingError::VesselAlreadyAssigned(_))));
        assert!(vessels.queries().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let storage = InMemoryStorage::failing();
        let vessels = ScriptedVessels::returning(vec![vessel("V1", "Atlantic")]);
        let service = BookingService::with_collaborators(storage.clone(), vessels.clone());

        let result = service
            .book(Consignment::new("Grain", 1000, containers(2)))
            .await;

        assert!(matches!(result, Err(BookingError::StoreFailed(_))));
        assert_eq!(vessels.queries().len(), 1);
        assert_eq!(storage.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_lookup_times_out() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![vessel("V1", "Atlantic")])
            .delayed(Duration::from_secs(10));
        let config = BookingConfig {
            lookup_timeout: Duration::from_millis(100),
        };
        let service = BookingService::new(storage.clone(), vessels, config);

        let result = service
            .book(Consignment::new("Grain", 1000, containers(2)))
            .await;

        assert!(matches!(
            result,
            Err(BookingError::LookupTimedOut { duration_ms: 100 })
        ));
        assert_eq!(storage.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_booking_stores_nothing() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![vessel("V1", "Atlantic")])
            .delayed(Duration::from_secs(1));
        let service = BookingService::with_collaborators(storage.clone(), vessels.clone());

        let outcome = tokio::time::timeout(
            Duration::from_millis(10),
            service.book(Consignment::new("Grain", 1000, containers(2))),
        )
        .await;

        assert!(outcome.is_err());
        assert_eq!(vessels.queries().len(), 1);
        assert_eq!(storage.len(), 0);

        // The vessel would have answered by now; nothing resumes the dropped booking
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(storage.len(), 0);
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_booking_does_not_affect_next_booking() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![
            Err(BookingError::lookup_failed("unreachable")),
            vessel("V2", "Pacific"),
        ]);
        let service = BookingService::with_collaborators(storage.clone(), vessels);

        let failed = service
            .book(Consignment::new("First", 500, containers(1)))
            .await;
        let booked = service
            .book(Consignment::new("Second", 700, containers(3)))
            .await
            .unwrap();

        assert!(failed.is_err());
        let listed = service.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description(), "Second");
        assert_eq!(listed[0], booked.consignment);
    }

    #[tokio::test]
    async fn test_list_all_is_stable_and_ordered() {
        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![
            vessel("V1", "Atlantic"),
            vessel("V2", "Pacific"),
            vessel("V3", "Arctic"),
        ]);
        let service = BookingService::with_collaborators(storage, vessels);

        for description in ["one", "two", "three"] {
            service
                .book(Consignment::new(description, 100, containers(1)))
                .await
                .unwrap();
        }

        let first = service.list_all().await.unwrap();
        let second = service.list_all().await.unwrap();

        assert_eq!(first, second);
        let order: Vec<&str> = first.iter().map(Consignment::description).collect();
        assert_eq!(order, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_concurrent_bookings_are_all_stored() {
        let storage = InMemoryStorage::default();
        let vessels =
            ScriptedVessels::returning(vec![vessel("V1", "Atlantic"), vessel("V2", "Pacific")]);
        let service = BookingService::with_collaborators(storage, vessels);

        let (a, b) = tokio::join!(
            service.book(Consignment::new("A", 100, containers(1))),
            service.book(Consignment::new("B", 200, containers(2))),
        );
        let a = a.unwrap();
        let b = b.unwrap();

        assert_ne!(a.consignment.vessel_id(), b.consignment.vessel_id());
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_service_port_delegates() {
        async fn book_via_port<S: BookingServicePort>(service: &S) -> BookingResult {
            service
                .book(Consignment::new("Grain", 1000, containers(2)))
                .await
                .unwrap()
        }

        let storage = InMemoryStorage::default();
        let vessels = ScriptedVessels::returning(vec![vessel("V1", "Atlantic")]);
        let service = BookingService::with_collaborators(storage, vessels);

        let result = book_via_port(&service).await;

        assert!(result.created);
        assert_eq!(BookingServicePort::list_all(&service).await.unwrap().len(), 1);
    }
}
