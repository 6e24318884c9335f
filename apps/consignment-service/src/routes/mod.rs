//! API routes

pub mod consignment;

use axum::Router;
use shipper_domain::booking::BookingServicePort;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::consignment::{
        ConsignmentDto, ContainerDto, CreateConsignmentResponse, ErrorResponse,
        GetConsignmentsResponse,
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::consignment::create_consignment,
        handlers::consignment::get_consignments,
        health_handler
    ),
    components(
        schemas(
            ConsignmentDto,
            ContainerDto,
            CreateConsignmentResponse,
            GetConsignmentsResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "consignments", description = "Consignment booking endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Consignment Service API",
        version = "0.1.0",
        description = "Books consignments onto available vessels",
        contact(
            name = "Shipper Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router<S: BookingServicePort + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(consignment::routes::<S>())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
