//! Domain model for genres.

use crate::model::genre::GenreDto;

/// Represents a genre with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Converts the genre to a DTO for API responses.
    pub fn into_dto(self) -> GenreDto {
        GenreDto {
            id: self.id,
            name: self.name,
        }
    }

    /// Converts an entity model to a genre domain model at the repository boundary.
    pub fn from_entity(entity: entity::genre::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
