//! Consignment routes

use axum::{routing::post, Router};
use shipper_domain::booking::BookingServicePort;

use crate::{
    handlers::consignment::{create_consignment, get_consignments},
    AppState,
};

/// Create consignment routes
pub fn routes<S: BookingServicePort + 'static>() -> Router<AppState<S>> {
    Router::new().route(
        "/consignments",
        post(create_consignment::<S>).get(get_consignments::<S>),
    )
}
