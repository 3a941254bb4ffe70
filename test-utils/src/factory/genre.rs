//! Genre factory for creating test genre entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test genres with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::genre::GenreFactory;
///
/// let genre = GenreFactory::new(&db)
///     .name("Puzzle")
///     .build()
///     .await?;
/// ```
pub struct GenreFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> GenreFactory<'a> {
    /// Creates a new GenreFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Genre {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Genre {}", next_id()),
        }
    }

    /// Sets the name for the genre.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the genre entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::genre::Model)` - Created genre entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::genre::Model, DbErr> {
        entity::genre::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a genre with default values.
///
/// Shorthand for `GenreFactory::new(db).build().await`.
pub async fn create_genre(db: &DatabaseConnection) -> Result<entity::genre::Model, DbErr> {
    GenreFactory::new(db).build().await
}
