//! Value objects for vessel lookups

use serde::{Deserialize, Serialize};

use crate::vessel::ids::VesselId;

/// Capacity requirements sent to the vessel-allocation service
///
/// Built fresh for every booking attempt and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselQuery {
    /// Weight the vessel must be able to carry
    pub max_weight: i32,
    /// Number of containers the vessel must hold
    pub capacity: i32,
}

impl VesselQuery {
    pub fn new(max_weight: i32, capacity: i32) -> Self {
        Self {
            max_weight,
            capacity,
        }
    }
}

/// A vessel returned by a successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselAssignment {
    pub vessel_id: VesselId,
    pub vessel_name: String,
}

impl VesselAssignment {
    pub fn new(vessel_id: impl Into<VesselId>, vessel_name: impl Into<String>) -> Self {
        Self {
            vessel_id: vessel_id.into(),
            vessel_name: vessel_name.into(),
        }
    }

    /// A zero-value assignment carries no usable vessel id
    pub fn is_empty(&self) -> bool {
        self.vessel_id.is_empty()
    }
}
