//! Booking domain module
//!
//! This module contains the core business logic and entities for booking
//! consignments onto vessels. It defines what a Consignment is and how a
//! booking flows from vessel lookup to storage.

mod entity;
mod error;
mod ports;
mod service;

pub use entity::{BookingResult, BookingStage, Consignment, Container};
pub use error::{BookingError, Result};
pub use ports::BookingServicePort;
pub use service::{BookingConfig, BookingService};
