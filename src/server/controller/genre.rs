use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, genre::GenreDto},
    server::{error::AppError, service::genre::GenreService, state::AppState},
};

/// Tag for grouping genre endpoints in OpenAPI documentation
pub static GENRE_TAG: &str = "genre";

/// List all genres.
///
/// Returns every genre in insertion order.
///
/// # Returns
/// - `200 OK` - List of genres
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/genres",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved genres", body = Vec<GenreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genres(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let genres = GenreService::new(&state.db).get_all().await?;

    let dtos: Vec<GenreDto> = genres.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
