//! Vessel-allocation service adapter for the Shipper booking service
//!
//! Implements the `VesselLookup` port over HTTP/JSON.

pub mod infrastructure;

pub use infrastructure::HttpVesselClient;
