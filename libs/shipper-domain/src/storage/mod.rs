//! Storage module
//!
//! Ports for persisting booked consignments.

mod ports;

pub use ports::ConsignmentRepository;
