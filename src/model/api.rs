use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single violated constraint on a request payload field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Field name as it appears in the JSON payload (camelCase).
    pub field: String,
    pub message: String,
}

/// Body of a 400 response caused by payload validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: Vec<FieldErrorDto>,
}
