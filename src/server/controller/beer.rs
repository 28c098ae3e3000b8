use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        beer::{BeerDto, QuantityDto},
    },
    server::{
        controller::extract::{ValidatedJson, ValidatedPath, ValidatedQuery},
        data::beer::BeerRepository,
        error::AppError,
        model::beer::BeerParam,
        service::beer::BeerService,
        state::AppState,
    },
};

/// Tag for grouping beer endpoints in OpenAPI documentation
pub static BEER_TAG: &str = "beer";

#[derive(Deserialize)]
pub struct BeerIdParam {
    pub id: Option<i32>,
}

fn service(state: &AppState) -> BeerService<BeerRepository<'_>> {
    BeerService::new(BeerRepository::new(&state.db))
}

/// Register a new beer.
///
/// Rejects the request if a beer with the same name already exists. Any `id` in the
/// payload is ignored.
///
/// # Returns
/// - `201 Created` - Successfully registered beer, with its assigned id
/// - `400 Bad Request` - Invalid payload or name already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/beers",
    tag = BEER_TAG,
    request_body = BeerDto,
    responses(
        (status = 201, description = "Successfully registered beer", body = BeerDto),
        (status = 400, description = "Invalid payload or name already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_beer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BeerDto>,
) -> Result<impl IntoResponse, AppError> {
    let beer = service(&state)
        .create(BeerParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(beer.into_dto())))
}

/// List beers, or get one beer by id.
///
/// Without the `id` query parameter every beer is returned ordered by id. With it, only
/// the beer having that id is returned, as a single object.
///
/// # Returns
/// - `200 OK` - Array of beers, or one beer when `id` is given
/// - `404 Not Found` - No beer with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/beers",
    tag = BEER_TAG,
    params(
        ("id" = Option<i32>, Query, description = "Beer ID; returns a single beer when set")
    ),
    responses(
        (status = 200, description = "All beers, or the beer with the given id", body = Vec<BeerDto>),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_beers(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<BeerIdParam>,
) -> Result<Response, AppError> {
    let service = service(&state);

    if let Some(id) = params.id {
        let beer = service.get_by_id(id).await?;
        return Ok((StatusCode::OK, Json(beer.into_dto())).into_response());
    }

    let beers = service.list_all().await?;

    Ok((
        StatusCode::OK,
        Json(beers.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    )
        .into_response())
}

/// Get a beer by its exact name.
///
/// # Returns
/// - `200 OK` - Beer details
/// - `404 Not Found` - No beer with this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/beers/{name}",
    tag = BEER_TAG,
    params(
        ("name" = String, Path, description = "Beer name, exact match")
    ),
    responses(
        (status = 200, description = "Successfully retrieved beer", body = BeerDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_beer_by_name(
    State(state): State<AppState>,
    ValidatedPath(name): ValidatedPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let beer = service(&state).get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(beer.into_dto())))
}

/// Replace every field of a beer.
///
/// The beer identified by the path is the one replaced; an `id` in the payload is ignored.
///
/// # Returns
/// - `200 OK` - Confirmation message with the updated id
/// - `400 Bad Request` - Invalid payload
/// - `404 Not Found` - No beer with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/beers/{id}",
    tag = BEER_TAG,
    params(
        ("id" = i32, Path, description = "Beer ID")
    ),
    request_body = BeerDto,
    responses(
        (status = 200, description = "Successfully updated beer", body = MessageDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_beer(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<BeerDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = service(&state)
        .update(id, BeerParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}

/// Delete a beer.
///
/// # Returns
/// - `204 No Content` - Successfully deleted beer
/// - `404 Not Found` - No beer with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/beers/{id}",
    tag = BEER_TAG,
    params(
        ("id" = i32, Path, description = "Beer ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted beer"),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_beer(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    service(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add stock to a beer.
///
/// # Returns
/// - `200 OK` - Beer with its new quantity
/// - `400 Bad Request` - Invalid amount, or the stock would exceed max
/// - `404 Not Found` - No beer with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/beers/{id}/increment",
    tag = BEER_TAG,
    params(
        ("id" = i32, Path, description = "Beer ID")
    ),
    request_body = QuantityDto,
    responses(
        (status = 200, description = "Successfully incremented stock", body = BeerDto),
        (status = 400, description = "Invalid amount or max stock exceeded", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn increment_beer(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<QuantityDto>,
) -> Result<impl IntoResponse, AppError> {
    let beer = service(&state).increment(id, payload.amount).await?;

    Ok((StatusCode::OK, Json(beer.into_dto())))
}

/// Remove stock from a beer.
///
/// # Returns
/// - `200 OK` - Beer with its new quantity
/// - `400 Bad Request` - Invalid amount, or the stock would go negative
/// - `404 Not Found` - No beer with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/beers/{id}/decrement",
    tag = BEER_TAG,
    params(
        ("id" = i32, Path, description = "Beer ID")
    ),
    request_body = QuantityDto,
    responses(
        (status = 200, description = "Successfully decremented stock", body = BeerDto),
        (status = 400, description = "Invalid amount or negative stock", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decrement_beer(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<QuantityDto>,
) -> Result<impl IntoResponse, AppError> {
    let beer = service(&state).decrement(id, payload.amount).await?;

    Ok((StatusCode::OK, Json(beer.into_dto())))
}
