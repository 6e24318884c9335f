//! HTTP Vessel Client Implementation
//!
//! This module implements the `VesselLookup` trait against the vessel-allocation
//! service's JSON API. It converts transport failures and HTTP statuses into
//! domain errors.
//!
//! ## Wire Contract
//!
//! `POST {base_url}/vessels/find-available`
//!
//! ```json
//! { "maxWeight": 1000, "capacity": 2 }
//! ```
//!
//! answered with `200 {"vessel": {"id": "V1", "name": "Atlantic"}}`. A `404` or a
//! `null` vessel means nothing matches.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use shipper_domain::{BookingError, VesselAssignment, VesselLookup, VesselQuery};
use tracing::{debug, error, info, instrument, warn};

const FIND_AVAILABLE_PATH: &str = "/vessels/find-available";

/// HTTP-based implementation of the VesselLookup port
///
/// ## Configuration
///
/// The client requires:
/// - The base URL of the vessel service (e.g. `http://vessel-service:50052`)
/// - A request timeout, applied to every lookup
///
/// ## Error Handling
///
/// - Connection failures and non-success statuses become `BookingError::LookupFailed`
/// - Client-side timeouts become `BookingError::LookupTimedOut`
/// - `404` and empty responses become `BookingError::NoVesselAvailable`
#[derive(Clone)]
pub struct HttpVesselClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpecificationBody {
    max_weight: i32,
    capacity: i32,
}

impl From<&VesselQuery> for SpecificationBody {
    fn from(query: &VesselQuery) -> Self {
        Self {
            max_weight: query.max_weight,
            capacity: query.capacity,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FindAvailableResponse {
    #[serde(default)]
    vessel: Option<VesselBody>,
}

#[derive(Debug, Deserialize)]
struct VesselBody {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

impl HttpVesselClient {
    /// Create a new vessel client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the vessel service
    /// * `timeout` - Upper bound on a single lookup request
    ///
    /// # Errors
    ///
    /// Returns `BookingError::ConfigError` if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use shipper_vessel::HttpVesselClient;
    ///
    /// let client = HttpVesselClient::new("http://localhost:50052", Duration::from_secs(5)).unwrap();
    /// ```
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BookingError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            BookingError::config_error(format!("Failed to create HTTP client: {}", e))
        })?;

        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        info!(base_url = %base_url, timeout_ms, "Initializing HttpVesselClient");

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, FIND_AVAILABLE_PATH)
    }
}

impl VesselLookup for HttpVesselClient {
    #[instrument(skip(self), fields(max_weight = query.max_weight, capacity = query.capacity))]
    fn find_available(
        &self,
        query: &VesselQuery,
    ) -> impl std::future::Future<Output = Result<VesselAssignment, BookingError>> + Send {
        let client = self.client.clone();
        let url = self.endpoint();
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let body = SpecificationBody::from(query);

        async move {
            debug!(url = %url, "Querying vessel service");

            let response = client.post(&url).json(&body).send().await.map_err(|err| {
                if err.is_timeout() {
                    warn!(url = %url, timeout_ms, "Vessel lookup timed out");
                    BookingError::lookup_timed_out(timeout_ms)
                } else {
                    error!(url = %url, error = ?err, "Vessel lookup request failed");
                    BookingError::lookup_failed(format!("Request to '{}' failed: {}", url, err))
                }
            })?;

            let status = response.status();

            if status == StatusCode::NOT_FOUND {
                info!("Vessel service reported no matching vessel");
                return Err(BookingError::no_vessel_available(format!(
                    "No vessel for max weight {} and capacity {}",
                    body.max_weight, body.capacity
                )));
            }

            if !status.is_success() {
                let detail = response.text().await.unwrap_or_default();
                error!(status = %status, detail = %detail, "Vessel service returned an error");
                return Err(BookingError::lookup_failed(format!(
                    "Vessel service returned {}: {}",
                    status, detail
                )));
            }

            let payload: FindAvailableResponse = response.json().await.map_err(|err| {
                error!(error = ?err, "Failed to decode vessel service response");
                BookingError::lookup_failed(format!("Invalid vessel service response: {}", err))
            })?;

            match payload.vessel {
                Some(vessel) => {
                    info!(vessel_id = %vessel.id, vessel_name = %vessel.name, "Found vessel");
                    Ok(VesselAssignment::new(vessel.id, vessel.name))
                }
                None => Err(BookingError::no_vessel_available(format!(
                    "No vessel for max weight {} and capacity {}",
                    body.max_weight, body.capacity
                ))),
            }
        }
    }
}
