use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quill_api_types::ErrorResponse;

use crate::application::AppError;

/// A 404 with the structured `{success: false}` envelope.
pub fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Last-resort conversion for failures no handler recovered from.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
