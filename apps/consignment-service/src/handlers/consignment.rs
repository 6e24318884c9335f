//! Consignment handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shipper_domain::booking::{BookingError, BookingServicePort, BookingStage};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    dto::consignment::{
        ConsignmentDto, CreateConsignmentResponse, ErrorResponse, GetConsignmentsResponse,
    },
    AppState,
};

/// Book a consignment onto an available vessel
#[utoipa::path(
    post,
    path = "/consignments",
    request_body = ConsignmentDto,
    responses(
        (status = 201, description = "Consignment booked", body = CreateConsignmentResponse),
        (status = 400, description = "Bad request - malformed body or invalid consignment", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse),
        (status = 422, description = "Body does not match the consignment schema", body = ErrorResponse),
        (status = 409, description = "No vessel can carry the consignment", body = ErrorResponse),
        (status = 502, description = "Vessel service failed or was unreachable", body = ErrorResponse),
        (status = 504, description = "Vessel lookup timed out", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "consignments"
)]
pub async fn create_consignment<S: BookingServicePort + 'static>(
    State(state): State<AppState<S>>,
    payload: Result<Json<ConsignmentDto>, JsonRejection>,
) -> impl IntoResponse {
    let booking_id = Uuid::now_v7();
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(booking_id = %booking_id, error = %rejection.body_text(), "Rejected request body");
            return (
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };
    info!(
        booking_id = %booking_id,
        stage = %BookingStage::Received,
        weight = payload.weight,
        containers = payload.containers.len(),
        "Received consignment"
    );

    match state.booking_service.book(payload.into()).await {
        Ok(result) => {
            let consignment = ConsignmentDto::from(&result.consignment);
            info!(
                booking_id = %booking_id,
                stage = %BookingStage::Stored,
                vessel_id = %consignment.vessel_id,
                "Consignment booked"
            );
            (
                StatusCode::CREATED,
                Json(CreateConsignmentResponse {
                    created: result.created,
                    consignment,
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(
                booking_id = %booking_id,
                stage = %BookingStage::Failed,
                failed_at = %err.failed_stage(),
                error = ?err,
                "Failed to book consignment"
            );
            error_response(err)
        }
    }
}

/// List every booked consignment
#[utoipa::path(
    get,
    path = "/consignments",
    responses(
        (status = 200, description = "All booked consignments in booking order", body = GetConsignmentsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "consignments"
)]
pub async fn get_consignments<S: BookingServicePort + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    match state.booking_service.list_all().await {
        Ok(consignments) => {
            info!(count = consignments.len(), "Listing consignments");
            (
                StatusCode::OK,
                Json(GetConsignmentsResponse {
                    consignments: consignments.iter().map(ConsignmentDto::from).collect(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(error = ?err, "Failed to list consignments");
            error_response(err)
        }
    }
}

fn error_response(err: BookingError) -> Response {
    let status = match &err {
        BookingError::InvalidInput(_) | BookingError::VesselAlreadyAssigned(_) => {
            StatusCode::BAD_REQUEST
        }
        BookingError::NoVesselAvailable(_) => StatusCode::CONFLICT,
        BookingError::LookupFailed(_) => StatusCode::BAD_GATEWAY,
        BookingError::LookupTimedOut { .. } => StatusCode::GATEWAY_TIMEOUT,
        BookingError::StoreFailed(_) | BookingError::ConfigError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
