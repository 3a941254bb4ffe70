//! Genre data repository for database operations.

use sea_orm::{
    ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::server::model::genre::Genre;

/// Repository providing database operations for genres.
pub struct GenreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreRepository<'a> {
    /// Creates a new GenreRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all genres ordered by ID, which matches insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<Genre>)` - All genres, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Genre>, DbErr> {
        let entities = entity::prelude::Genre::find()
            .order_by_asc(entity::genre::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Genre::from_entity).collect())
    }

    /// Counts stored genres.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Genre::find().count(self.db).await
    }

    /// Inserts one genre per name in a single statement, preserving the given order.
    ///
    /// Does nothing when `names` is empty.
    ///
    /// # Arguments
    /// - `names` - Genre names, each must not already exist
    ///
    /// # Returns
    /// - `Ok(())` - All genres inserted
    /// - `Err(DbErr)` - Database error, including unique name violations
    pub async fn create_many(&self, names: &[&str]) -> Result<(), DbErr> {
        if names.is_empty() {
            return Ok(());
        }

        let models = names.iter().map(|name| entity::genre::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        });

        entity::prelude::Genre::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
