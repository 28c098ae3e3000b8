use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request payload could not be accepted.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Body is missing, is not JSON, or doesn't match the expected shape
    /// (missing field, wrong type, unknown beer type).
    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),

    /// Path segment doesn't parse, e.g. a non-numeric beer id.
    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),

    /// Query string doesn't parse, e.g. `?id=abc`.
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    /// Body parsed but a field is out of bounds.
    #[error("{0}")]
    Fields(#[from] validator::ValidationErrors),
}

/// Every validation failure is a 400 Bad Request, including the rejections axum would
/// otherwise report as 415 or 422.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
