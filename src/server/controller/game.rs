use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        game::{GameDetailsDto, GameSummaryDto, SaveGameDto},
    },
    server::{
        error::AppError,
        model::game::{CreateGameParam, UpdateGameParam},
        service::game::GameService,
        state::AppState,
        util::{json::AppJson, path::AppPath},
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// List all games.
///
/// Returns every game with its genre resolved to the genre name. No pagination or
/// filtering is applied.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of game summaries ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).get_all().await?;

    let dtos: Vec<GameSummaryDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a game by ID.
///
/// Returns the detail view of the game, which references its genre by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID
///
/// # Returns
/// - `200 OK` - Game details
/// - `404 Not Found` - No game with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDetailsDto),
        (status = 400, description = "Invalid game ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Create a new game.
///
/// Validates every field of the payload before inserting. The response echoes the stored
/// game and carries a `Location` header pointing at the new resource.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Game data (name, genre ID, price, release date)
///
/// # Returns
/// - `201 Created` - Successfully created game
/// - `400 Bad Request` - Malformed body or one or more invalid fields
/// - `500 Internal Server Error` - Database error, including an unknown genre ID
#[utoipa::path(
    post,
    path = "/games",
    tag = GAME_TAG,
    request_body = SaveGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDetailsDto,
            headers(("Location" = String, description = "Path of the created game"))),
        (status = 400, description = "Invalid game data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SaveGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateGameParam::from_dto(payload)?;
    let game = GameService::new(&state.db).create(param).await?;

    let location = format!("/games/{}", game.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(game.into_dto()),
    ))
}

/// Replace a game.
///
/// Overwrites every field of an existing game. The payload has the same shape and
/// constraints as for creation, partial updates are not supported.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID to replace
/// - `payload` - New game data
///
/// # Returns
/// - `204 No Content` - Successfully updated game
/// - `400 Bad Request` - Malformed body or one or more invalid fields
/// - `404 Not Found` - No game with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = SaveGameDto,
    responses(
        (status = 204, description = "Successfully updated game"),
        (status = 400, description = "Invalid game data", body = ValidationErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<SaveGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateGameParam::from_dto(id, payload)?;
    GameService::new(&state.db).update(param).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a game.
///
/// Deletes the game if it exists. Deleting an absent game also answers 204, so the
/// response does not reveal whether anything was removed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID to delete
///
/// # Returns
/// - `204 No Content` - Game deleted or already absent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Game deleted or already absent"),
        (status = 400, description = "Invalid game ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    GameService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
