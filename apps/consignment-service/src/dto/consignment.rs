//! DTOs for consignment endpoints
//!
//! Field names follow the camelCase wire schema (`vesselId`, `customerId`, ...).

use serde::{Deserialize, Serialize};
use shipper_domain::{Consignment, Container};
use utoipa::ToSchema;

/// A unit of cargo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerDto {
    #[schema(example = "cont-1")]
    pub id: String,
    #[schema(example = "cust-001")]
    pub customer_id: String,
    #[schema(example = "Manchester, United Kingdom")]
    pub origin: String,
    #[schema(example = "user-001")]
    pub user_id: String,
}

/// A consignment as exchanged over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsignmentDto {
    #[schema(example = "This is a test consignment")]
    pub description: String,
    #[schema(example = 55000)]
    pub weight: i32,
    #[serde(default)]
    pub containers: Vec<ContainerDto>,
    /// Ignored on input, populated on every booked consignment
    #[serde(default)]
    #[schema(example = "")]
    pub vessel_id: String,
}

/// Response body for a successful booking
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateConsignmentResponse {
    pub created: bool,
    pub consignment: ConsignmentDto,
}

/// Response body for the listing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetConsignmentsResponse {
    pub consignments: Vec<ConsignmentDto>,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "No vessel available: No vessel for max weight 55000 and capacity 3")]
    pub error: String,
}

impl From<ContainerDto> for Container {
    fn from(dto: ContainerDto) -> Self {
        Container {
            id: dto.id,
            customer_id: dto.customer_id,
            origin: dto.origin,
            user_id: dto.user_id,
        }
    }
}

impl From<&Container> for ContainerDto {
    fn from(container: &Container) -> Self {
        ContainerDto {
            id: container.id.clone(),
            customer_id: container.customer_id.clone(),
            origin: container.origin.clone(),
            user_id: container.user_id.clone(),
        }
    }
}

impl From<ConsignmentDto> for Consignment {
    fn from(dto: ConsignmentDto) -> Self {
        // The vessel is always chosen by the lookup, whatever the client sent
        Consignment::new(
            dto.description,
            dto.weight,
            dto.containers.into_iter().map(Container::from).collect(),
        )
    }
}

impl From<&Consignment> for ConsignmentDto {
    fn from(consignment: &Consignment) -> Self {
        ConsignmentDto {
            description: consignment.description().to_string(),
            weight: consignment.weight(),
            containers: consignment.containers().iter().map(ContainerDto::from).collect(),
            vessel_id: consignment
                .vessel_id()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}
