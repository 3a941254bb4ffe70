use crate::server::{
    data::game::GameRepository,
    model::game::{CreateGameParam, UpdateGameParam},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
