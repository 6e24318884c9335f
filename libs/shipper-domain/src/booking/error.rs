//! Domain errors for booking operations
//!
//! This module defines all possible errors that can occur while booking a
//! consignment. These are domain-level errors that abstract away infrastructure
//! details.

use thiserror::Error;

use crate::booking::entity::BookingStage;

/// Errors that can occur while booking or listing consignments
///
/// These errors represent business-level failures and are independent of
/// infrastructure implementation details (e.g., no reqwest error types here).
#[derive(Error, Debug)]
pub enum BookingError {
    /// The vessel lookup collaborator returned an error or was unreachable
    #[error("Vessel lookup failed: {0}")]
    LookupFailed(String),

    /// The vessel lookup did not complete in time
    #[error("Vessel lookup timed out after {duration_ms}ms")]
    LookupTimedOut { duration_ms: u64 },

    /// The lookup succeeded but no vessel matches the requested capacity
    #[error("No vessel available: {0}")]
    NoVesselAvailable(String),

    /// Failed to store the consignment in the repository
    #[error("Storage operation failed: {0}")]
    StoreFailed(String),

    /// The consignment is malformed
    #[error("Invalid consignment: {0}")]
    InvalidInput(String),

    /// The consignment is already bound to a vessel
    #[error("Consignment is already assigned to vessel {0}")]
    VesselAlreadyAssigned(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BookingError {
    /// Create a lookup failure error with a message
    pub fn lookup_failed(msg: impl Into<String>) -> Self {
        Self::LookupFailed(msg.into())
    }

    /// Create a lookup timeout error
    pub fn lookup_timed_out(duration_ms: u64) -> Self {
        Self::LookupTimedOut { duration_ms }
    }

    /// Create a no vessel available error with a message
    pub fn no_vessel_available(msg: impl Into<String>) -> Self {
        Self::NoVesselAvailable(msg.into())
    }

    /// Create a store failure error with a message
    pub fn store_failed(msg: impl Into<String>) -> Self {
        Self::StoreFailed(msg.into())
    }

    /// Create an invalid input error with a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a config error with a message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// The last stage a booking reached before failing with this error
    pub fn failed_stage(&self) -> BookingStage {
        match self {
            Self::LookupFailed(_) | Self::LookupTimedOut { .. } | Self::NoVesselAvailable(_) => {
                BookingStage::LookingUpVessel
            }
            Self::StoreFailed(_) => BookingStage::VesselAssigned,
            Self::InvalidInput(_) | Self::VesselAlreadyAssigned(_) | Self::ConfigError(_) => {
                BookingStage::Received
            }
        }
    }
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;
