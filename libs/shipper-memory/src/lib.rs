//! In-memory storage adapter for the Shipper booking service
//!
//! Stands in for a real datastore behind the `ConsignmentRepository` port.

pub mod infrastructure;

pub use infrastructure::InMemoryConsignmentRepository;
