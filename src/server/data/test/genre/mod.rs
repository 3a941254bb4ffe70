use crate::server::data::genre::GenreRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create_many;
