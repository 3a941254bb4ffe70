use sea_orm::DatabaseConnection;

use crate::server::{data::genre::GenreRepository, error::AppError, model::genre::Genre};

pub struct GenreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all genres in insertion order
    pub async fn get_all(&self) -> Result<Vec<Genre>, AppError> {
        let genres = GenreRepository::new(self.db).get_all().await?;

        Ok(genres)
    }
}
