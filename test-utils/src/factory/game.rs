//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// The genre must already exist since the games table references it.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db, genre.id)
///     .name("Kart Legends")
///     .price(39.5)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    genre_id: i32,
    price: f64,
    release_date: NaiveDate,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {id}"` where id is auto-incremented
    /// - price: `49.99`
    /// - release_date: `2024-01-15`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `genre_id` - ID of an existing genre
    pub fn new(db: &'a DatabaseConnection, genre_id: i32) -> Self {
        Self {
            db,
            name: format!("Game {}", next_id()),
            genre_id,
            price: 49.99,
            release_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        }
    }

    /// Sets the name for the game.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price for the game.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the release date for the game.
    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = release_date;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown genre)
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            genre_id: ActiveValue::Set(self.genre_id),
            price: ActiveValue::Set(self.price),
            release_date: ActiveValue::Set(self.release_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values for the given genre.
///
/// Shorthand for `GameFactory::new(db, genre_id).build().await`.
pub async fn create_game(
    db: &DatabaseConnection,
    genre_id: i32,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, genre_id).build().await
}
