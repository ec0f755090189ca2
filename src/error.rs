use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{repositories::RepositoryError, response::ApiResponse};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Repository error")]
    Repository(#[from] RepositoryError),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = match &self {
            // Absence is reported with an empty body.
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            AppError::Repository(err) => err.to_string(),
        };

        tracing::error!(error = %error, "request failed");

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData { error }),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
