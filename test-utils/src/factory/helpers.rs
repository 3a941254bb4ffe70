//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Genre names carry a unique constraint, so factories derive their default names from
/// this counter to avoid collisions between entities created in the same test.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a genre and a game referencing it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((genre, game))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_genre(
    db: &DatabaseConnection,
) -> Result<(entity::genre::Model, entity::game::Model), DbErr> {
    let genre = crate::factory::genre::create_genre(db).await?;
    let game = crate::factory::game::create_game(db, genre.id).await?;

    Ok((genre, game))
}
