use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::utils::error::AgeError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("calculation failed: {0}")]
    Calculation(#[from] AgeError),
    #[error("rejected request body: {0}")]
    Body(#[from] JsonRejection),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Calculation(AgeError::InvalidDate { .. }) => "invalid_date",
            ApiError::Calculation(AgeError::MissingField { .. }) => "missing_field",
            ApiError::Calculation(_) => "internal_error",
            ApiError::Body(_) => "malformed_body",
        }
    }
}

// 對外一律回傳固定的 500，細節只寫進日誌
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        error!(code = self.code(), error = %self, "api_error");

        let body = Json(ErrorResponse {
            error: INTERNAL_ERROR_MESSAGE,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
