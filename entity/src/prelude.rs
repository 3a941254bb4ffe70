pub use super::game::Entity as Game;
pub use super::genre::Entity as Genre;
