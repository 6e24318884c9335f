//! Domain entities for consignment booking
//!
//! A Consignment is a shipment record carrying cargo (Containers) that must be
//! bound to exactly one vessel before it is stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::booking::error::{BookingError, Result};
use crate::vessel::{VesselId, VesselQuery};

/// An opaque unit of cargo
///
/// Only the number of containers matters to vessel selection; the fields are
/// carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub customer_id: String,
    pub origin: String,
    pub user_id: String,
}

/// A shipment booking record
///
/// Consignments are:
/// - **Identifier-less**: records are distinguished by their content and position in the store
/// - **Bound once**: the vessel is assigned a single time and never changes afterwards
///
/// # Example
///
/// ```rust
/// use shipper_domain::booking::{Consignment, Container};
///
/// let consignment = Consignment::new("Grain", 1000, vec![Container::default()]);
/// assert!(!consignment.is_booked());
/// assert_eq!(consignment.container_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consignment {
    /// Free-form description of the cargo
    description: String,

    /// Total cargo weight
    weight: i32,

    /// Containers in the order they were declared
    containers: Vec<Container>,

    /// Vessel the consignment is booked on, unset until a lookup succeeds
    vessel_id: Option<VesselId>,
}

impl Consignment {
    /// Create an unbooked consignment
    pub fn new(description: impl Into<String>, weight: i32, containers: Vec<Container>) -> Self {
        Self {
            description: description.into(),
            weight,
            containers,
            vessel_id: None,
        }
    }

    /// Create a Consignment with explicit values (used for reconstruction)
    pub fn from_parts(
        description: String,
        weight: i32,
        containers: Vec<Container>,
        vessel_id: Option<VesselId>,
    ) -> Self {
        Self {
            description,
            weight,
            containers,
            vessel_id,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Get the assigned vessel (if booked)
    pub fn vessel_id(&self) -> Option<&VesselId> {
        self.vessel_id.as_ref()
    }

    /// Check if this consignment has been bound to a vessel
    pub fn is_booked(&self) -> bool {
        self.vessel_id.is_some()
    }

    /// Check the preconditions for issuing a vessel lookup
    ///
    /// # Errors
    ///
    /// - `BookingError::InvalidInput` if the weight is not positive or there are no containers
    /// - `BookingError::VesselAlreadyAssigned` if the consignment is already booked
    pub fn validate(&self) -> Result<()> {
        if self.weight <= 0 {
            return Err(BookingError::invalid_input(format!(
                "Weight must be positive, got {}",
                self.weight
            )));
        }

        if self.containers.is_empty() {
            return Err(BookingError::invalid_input(
                "Consignment must contain at least one container",
            ));
        }

        if let Some(existing) = &self.vessel_id {
            return Err(BookingError::VesselAlreadyAssigned(existing.to_string()));
        }

        Ok(())
    }

    /// Derive the capacity query for this consignment
    pub fn vessel_query(&self) -> Result<VesselQuery> {
        let capacity = i32::try_from(self.containers.len()).map_err(|_| {
            BookingError::invalid_input(format!(
                "Container count {} exceeds the supported capacity",
                self.containers.len()
            ))
        })?;

        Ok(VesselQuery::new(self.weight, capacity))
    }

    /// Bind the consignment to a vessel
    ///
    /// # Errors
    ///
    /// Returns `BookingError::VesselAlreadyAssigned` if a vessel is already bound;
    /// the existing binding is left untouched.
    pub fn assign_vessel(&mut self, vessel_id: VesselId) -> Result<()> {
        if let Some(existing) = &self.vessel_id {
            return Err(BookingError::VesselAlreadyAssigned(existing.to_string()));
        }
        self.vessel_id = Some(vessel_id);
        Ok(())
    }
}

/// Outcome of a booking returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResult {
    /// True when both the vessel lookup and the store succeeded
    pub created: bool,
    /// The stored, vessel-bound consignment
    pub consignment: Consignment,
}

impl BookingResult {
    pub fn created(consignment: Consignment) -> Self {
        Self {
            created: true,
            consignment,
        }
    }
}

/// Stages a single booking moves through
///
/// `Received -> LookingUpVessel -> VesselAssigned -> Stored`, or `Failed` from
/// any stage before `Stored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    Received,
    LookingUpVessel,
    VesselAssigned,
    Stored,
    Failed,
}

impl fmt::Display for BookingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStage::Received => "received",
            BookingStage::LookingUpVessel => "looking_up_vessel",
            BookingStage::VesselAssigned => "vessel_assigned",
            BookingStage::Stored => "stored",
            BookingStage::Failed => "failed",
        };
        f.write_str(name)
    }
}
