use chrono::NaiveDate;
use garde::Validate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Date format accepted and produced for `releaseDate`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Write payload fields in wire spelling, in the order violations are reported.
pub const SAVE_GAME_FIELDS: [&str; 4] = ["name", "genreId", "price", "releaseDate"];

/// Game as shown in listings, with the genre resolved to its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSummaryDto {
    pub id: i32,
    pub name: String,
    pub genre: String,
    pub price: f64,
    pub release_date: NaiveDate,
}

/// Game as returned by single-item reads and by creation, referencing the genre by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDetailsDto {
    pub id: i32,
    pub name: String,
    pub genre_id: i32,
    pub price: f64,
    pub release_date: NaiveDate,
}

/// Payload for creating a game or fully replacing an existing one.
///
/// Every field is optional at the deserialization level so that a missing field is
/// reported as a validation violation alongside the others instead of aborting JSON
/// parsing on the first absent key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveGameDto {
    #[garde(required, length(chars, min = 1, max = 50))]
    #[schema(example = "Epic Adventure")]
    pub name: Option<String>,
    #[garde(required, range(min = 1, max = 50))]
    #[schema(example = 2)]
    pub genre_id: Option<i32>,
    /// Price as a binary floating point number, so decimal amounts may round in the last
    /// digits. Bounds are inclusive.
    #[garde(required, range(min = 1.0, max = 150.0))]
    #[schema(example = 59.99)]
    pub price: Option<f64>,
    #[garde(required, custom(validate_release_date))]
    #[schema(example = "2024-06-15")]
    pub release_date: Option<String>,
}

/// Parses a `YYYY-MM-DD` release date.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, RELEASE_DATE_FORMAT).ok()
}

fn validate_release_date(value: &Option<String>, _ctx: &()) -> garde::Result {
    match value {
        Some(date) if parse_release_date(date).is_none() => Err(garde::Error::new(
            "must be a calendar date formatted as YYYY-MM-DD",
        )),
        _ => Ok(()),
    }
}
