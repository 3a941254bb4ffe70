//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories never touch
//! the API layer, they insert rows directly through SeaORM active models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let genre = factory::create_genre(&db).await?;
//!     let game = factory::create_game(&db, genre.id).await?;
//!
//!     // Create a game together with its genre
//!     let (genre, game) = factory::helpers::create_game_with_genre(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db, genre.id)
//!     .name("Street Brawler")
//!     .price(19.99)
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod genre;
pub mod helpers;

pub use game::create_game;
pub use genre::create_genre;
