use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        game::{create_game, delete_game, get_game, get_games, update_game},
        genre::get_genres,
    },
    state::AppState,
};

/// OpenAPI document covering every catalog endpoint.
#[derive(OpenApi)]
#[openapi(
    info(title = "GameStore API", description = "CRUD backend for a catalog of games and genres"),
    paths(
        crate::server::controller::game::get_games,
        crate::server::controller::game::get_game,
        crate::server::controller::game::create_game,
        crate::server::controller::game::update_game,
        crate::server::controller::game::delete_game,
        crate::server::controller::genre::get_genres,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(get_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route("/genres", get(get_genres))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
