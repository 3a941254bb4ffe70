//! Game data repository for database operations.
//!
//! This module provides the `GameRepository` for managing game records in the database.
//! It handles creation, full replacement, queries, and deletion with conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::game::{CreateGameParam, Game, GameSummary, UpdateGameParam};

/// Repository providing database operations for game management.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game.
    ///
    /// The genre id is written as given. A genre id without a matching row is rejected
    /// by the foreign key constraint and surfaces as a database error.
    ///
    /// # Arguments
    /// - `param` - Validated creation parameters
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            name: ActiveValue::Set(param.name),
            genre_id: ActiveValue::Set(param.genre_id),
            price: ActiveValue::Set(param.price),
            release_date: ActiveValue::Set(param.release_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Gets a game by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets all games together with their genre names, ordered by ID.
    ///
    /// Resolves the genre with a single left join rather than one lookup per game.
    ///
    /// # Returns
    /// - `Ok(Vec<GameSummary>)` - All games, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_genre(&self) -> Result<Vec<GameSummary>, DbErr> {
        let rows = entity::prelude::Game::find()
            .find_also_related(entity::prelude::Genre)
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(game, genre)| GameSummary::from_entity(game, genre))
            .collect())
    }

    /// Replaces every field of an existing game.
    ///
    /// # Arguments
    /// - `param` - ID of the game plus its new field values
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game exists with the specified ID, nothing was written
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateGameParam) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = game.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.genre_id = ActiveValue::Set(param.genre_id);
        active_model.price = ActiveValue::Set(param.price);
        active_model.release_date = ActiveValue::Set(param.release_date);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Game::from_entity(entity)))
    }

    /// Deletes a game.
    ///
    /// # Arguments
    /// - `id` - ID of the game to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game existed with the specified ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
