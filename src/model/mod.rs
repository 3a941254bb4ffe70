//! Data transfer objects exchanged with API clients.
//!
//! These shapes define the JSON wire format and are kept apart from the SeaORM entity
//! models so the storage layout can change without touching the API.

pub mod api;
pub mod game;
pub mod genre;
