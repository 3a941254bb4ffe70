//! Conversion of garde validation reports into field-level error DTOs.

use crate::model::{api::FieldErrorDto, game::SAVE_GAME_FIELDS};

/// Flattens a validation report into one entry per violated constraint.
///
/// Field paths are reported in the camelCase spelling used on the wire. garde sorts its
/// report by path, so entries are reordered to follow the payload field order
/// (`name`, `genreId`, `price`, `releaseDate`). Unknown fields go last.
pub fn field_errors(report: &garde::Report) -> Vec<FieldErrorDto> {
    let mut errors: Vec<FieldErrorDto> = report
        .iter()
        .map(|(path, error)| FieldErrorDto {
            field: wire_name(&path.to_string()),
            message: error.message().to_string(),
        })
        .collect();

    errors.sort_by_key(|e| field_rank(&e.field));

    errors
}

fn wire_name(path: &str) -> String {
    match path {
        "genre_id" => "genreId".to_string(),
        "release_date" => "releaseDate".to_string(),
        other => other.to_string(),
    }
}

fn field_rank(field: &str) -> usize {
    SAVE_GAME_FIELDS
        .iter()
        .position(|f| *f == field)
        .unwrap_or(SAVE_GAME_FIELDS.len())
}
