use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        beer::{BeerDto, BeerType, QuantityDto},
    },
    server::{
        controller::beer::{
            self, create_beer, decrement_beer, delete_beer, get_beer_by_name, get_beers,
            increment_beer, update_beer,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        beer::create_beer,
        beer::get_beers,
        beer::get_beer_by_name,
        beer::update_beer,
        beer::delete_beer,
        beer::increment_beer,
        beer::decrement_beer,
    ),
    components(schemas(BeerDto, BeerType, QuantityDto, MessageDto, ErrorDto)),
    tags((name = "beer", description = "Beer catalog and stock levels"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    // GET by name and PUT/DELETE by id share one path segment.
    Router::new()
        .route("/api/v1/beers", get(get_beers).post(create_beer))
        .route("/api/v1/beers/", get(get_beers).post(create_beer))
        .route(
            "/api/v1/beers/{id}",
            get(get_beer_by_name).put(update_beer).delete(delete_beer),
        )
        .route("/api/v1/beers/{id}/increment", patch(increment_beer))
        .route("/api/v1/beers/{id}/decrement", patch(decrement_beer))
}

/// Builds the complete application: API routes, docs, and HTTP middleware.
pub fn app(state: AppState) -> Router {
    router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
