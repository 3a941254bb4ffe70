use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections are reported as `AppError`.
///
/// Behaves like `axum::Json` but malformed bodies, wrong field types and missing
/// content types all produce a 400 response with the usual `ErrorDto` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
