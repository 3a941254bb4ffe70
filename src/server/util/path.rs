use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// Path parameter extractor whose rejections are reported as `AppError`.
///
/// An id that does not parse answers 400 with an `ErrorDto` body instead of axum's
/// plain text rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
