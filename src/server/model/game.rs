//! Domain models and parameter types for game operations.
//!
//! These models serve as the boundary between the data layer and the service/controller
//! layers. Entity models are converted here so they never leak past the repositories,
//! and write DTOs are validated here before they can become parameters.

use chrono::NaiveDate;
use garde::Validate;

use crate::{
    model::game::{parse_release_date, GameDetailsDto, GameSummaryDto, SaveGameDto},
    server::error::AppError,
};

/// Represents a game with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub genre_id: i32,
    pub price: f64,
    pub release_date: NaiveDate,
}

impl Game {
    /// Converts the game to the detail DTO, which references the genre by id.
    pub fn into_dto(self) -> GameDetailsDto {
        GameDetailsDto {
            id: self.id,
            name: self.name,
            genre_id: self.genre_id,
            price: self.price,
            release_date: self.release_date,
        }
    }

    /// Converts an entity model to a game domain model at the repository boundary.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            genre_id: entity.genre_id,
            price: entity.price,
            release_date: entity.release_date,
        }
    }
}

/// Game joined with the name of its genre, used for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub id: i32,
    pub name: String,
    /// `None` when the referenced genre row does not exist.
    pub genre_name: Option<String>,
    pub price: f64,
    pub release_date: NaiveDate,
}

impl GameSummary {
    /// Converts the summary to the listing DTO.
    ///
    /// A game whose genre row is missing is listed with an empty genre name.
    pub fn into_dto(self) -> GameSummaryDto {
        GameSummaryDto {
            id: self.id,
            name: self.name,
            genre: self.genre_name.unwrap_or_default(),
            price: self.price,
            release_date: self.release_date,
        }
    }

    /// Builds a summary from a game entity and the genre found by the join.
    pub fn from_entity(game: entity::game::Model, genre: Option<entity::genre::Model>) -> Self {
        Self {
            id: game.id,
            name: game.name,
            genre_name: genre.map(|g| g.name),
            price: game.price,
            release_date: game.release_date,
        }
    }
}

/// Parameters for creating a new game.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameParam {
    pub name: String,
    pub genre_id: i32,
    pub price: f64,
    pub release_date: NaiveDate,
}

impl CreateGameParam {
    /// Validates a write payload and converts it into creation parameters.
    ///
    /// Every field constraint is checked and all violations are returned together, so
    /// nothing reaches the database unless the whole payload is valid.
    ///
    /// # Returns
    /// - `Ok(CreateGameParam)` - Payload satisfied every constraint
    /// - `Err(AppError::Validation)` - One or more fields violated a constraint
    pub fn from_dto(dto: SaveGameDto) -> Result<Self, AppError> {
        dto.validate()?;

        let release_date = dto
            .release_date
            .as_deref()
            .and_then(parse_release_date)
            .ok_or_else(|| missing_after_validation("releaseDate"))?;

        Ok(Self {
            name: dto.name.ok_or_else(|| missing_after_validation("name"))?,
            genre_id: dto
                .genre_id
                .ok_or_else(|| missing_after_validation("genreId"))?,
            price: dto.price.ok_or_else(|| missing_after_validation("price"))?,
            release_date,
        })
    }
}

/// Parameters for fully replacing an existing game.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGameParam {
    /// ID of the game to replace.
    pub id: i32,
    pub name: String,
    pub genre_id: i32,
    pub price: f64,
    pub release_date: NaiveDate,
}

impl UpdateGameParam {
    /// Validates a write payload and converts it into replacement parameters for `id`.
    ///
    /// # Returns
    /// - `Ok(UpdateGameParam)` - Payload satisfied every constraint
    /// - `Err(AppError::Validation)` - One or more fields violated a constraint
    pub fn from_dto(id: i32, dto: SaveGameDto) -> Result<Self, AppError> {
        let CreateGameParam {
            name,
            genre_id,
            price,
            release_date,
        } = CreateGameParam::from_dto(dto)?;

        Ok(Self {
            id,
            name,
            genre_id,
            price,
            release_date,
        })
    }
}

fn missing_after_validation(field: &str) -> AppError {
    AppError::InternalError(format!("Field '{}' missing after successful validation", field))
}
