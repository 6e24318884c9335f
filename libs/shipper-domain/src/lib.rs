//! # Shipper Domain Layer
//!
//! This crate contains the business logic and domain models for the Shipper
//! consignment booking service. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Consignment, Container, VesselQuery)
//! - **Ports**: Trait definitions for external dependencies (ConsignmentRepository, VesselLookup)
//! - **Services**: Booking orchestration (BookingService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, databases, etc.).
//! All external dependencies are expressed as traits (ports) that are implemented
//! by adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use shipper_domain::booking::{BookingService, Consignment, Container};
//! use shipper_domain::{ConsignmentRepository, VesselLookup};
//!
//! // The service is generic over any repository and vessel lookup implementation
//! async fn example<R: ConsignmentRepository, V: VesselLookup>(service: BookingService<R, V>) {
//!     let consignment = Consignment::new("Grain", 1000, vec![Container::default()]);
//!     let result = service.book(consignment).await.unwrap();
//!     println!("Booked on vessel: {:?}", result.consignment.vessel_id());
//! }
//! ```

pub mod booking;
pub mod storage;
pub mod vessel;

// Re-export commonly used types
pub use booking::{BookingError, BookingResult, BookingService, Consignment, Container};
pub use storage::ConsignmentRepository;
pub use vessel::{VesselAssignment, VesselId, VesselLookup, VesselQuery};
