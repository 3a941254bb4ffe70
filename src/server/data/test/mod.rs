mod game;
mod genre;
