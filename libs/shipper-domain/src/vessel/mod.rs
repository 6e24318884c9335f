//! Vessel lookup module
//!
//! Value objects exchanged with the external vessel-allocation service and
//! the port through which the booking coordinator reaches it.

mod entity;
mod ids;
mod ports;

pub use entity::{VesselAssignment, VesselQuery};
pub use ids::VesselId;
pub use ports::VesselLookup;
