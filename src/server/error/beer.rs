use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business rule violations raised by the beer service.
#[derive(Error, Debug, PartialEq)]
pub enum BeerError {
    /// A beer with this name is already registered.
    #[error("Beer already registered with name: {0}")]
    AlreadyRegistered(String),

    #[error("Beer with id {0} not found in the system.")]
    NotFoundById(i32),

    #[error("Beer with name {0} not found in the system.")]
    NotFoundByName(String),

    /// Incrementing by `amount` would take the stock above `max`.
    #[error("Beer with id {id} has exceeded max stock when tried to increment by {amount}")]
    StockExceeded { id: i32, amount: i32 },

    /// Decrementing by `amount` would take the stock below zero.
    #[error("Beer with id {id} has yielded negative stock when tried to decrement by {amount}")]
    NegativeStock { id: i32, amount: i32 },

    /// Stock adjustments only move by a positive amount.
    #[error("Stock adjustment amount must be positive, got {0}")]
    InvalidAmount(i32),
}

/// Converts beer errors into HTTP responses.
///
/// - `NotFoundById` / `NotFoundByName` → 404 Not Found
/// - `AlreadyRegistered` / `StockExceeded` / `NegativeStock` / `InvalidAmount` → 400 Bad Request
///
/// The error message is returned to the client as-is.
impl IntoResponse for BeerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFoundById(_) | Self::NotFoundByName(_) => StatusCode::NOT_FOUND,
            Self::AlreadyRegistered(_)
            | Self::StockExceeded { .. }
            | Self::NegativeStock { .. }
            | Self::InvalidAmount(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
