use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{CreateGameParam, Game, GameSummary, UpdateGameParam},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game with its genre name, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<GameSummary>, AppError> {
        let games = GameRepository::new(self.db).get_all_with_genre().await?;

        Ok(games)
    }

    /// Gets a single game
    ///
    /// Returns `AppError::NotFound` if no game exists with the given ID
    pub async fn get_by_id(&self, id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| game_not_found(id))
    }

    /// Creates a game from validated parameters
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        let game = GameRepository::new(self.db).create(param).await?;

        tracing::debug!("Created game {}", game.id);

        Ok(game)
    }

    /// Replaces all fields of an existing game
    ///
    /// Returns `AppError::NotFound` without writing if the game doesn't exist
    pub async fn update(&self, param: UpdateGameParam) -> Result<Game, AppError> {
        let id = param.id;
        let game = GameRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| game_not_found(id))?;

        tracing::debug!("Updated game {}", id);

        Ok(game)
    }

    /// Deletes a game if it exists
    ///
    /// Deleting an absent game is not an error, callers get the same result either way.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = GameRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::debug!("Deleted game {}", id);
        } else {
            tracing::debug!("Delete requested for absent game {}", id);
        }

        Ok(())
    }
}

fn game_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Game with id {} not found", id))
}
