//! Request and response bodies

pub mod consignment;
