use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body whose decoding failures come back as [`AppError`],
/// so they share the structured error body with every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct CourseJson<T>(pub T);
