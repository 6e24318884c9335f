//! HTTP handlers

pub mod consignment;
