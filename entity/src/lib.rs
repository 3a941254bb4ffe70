//! SeaORM entity models for the game catalog tables.

pub mod prelude;

pub mod game;
pub mod genre;
