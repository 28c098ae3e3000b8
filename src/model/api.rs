use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response produced by the API.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body for operations that don't return the resource itself.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
