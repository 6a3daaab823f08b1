//! Typed errors and HTTP mapping.

use crate::response::{ErrorBody, ValidationEnvelope};
use crate::service::Violation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error("unknown store kind: {0} (expected postgres or memory)")]
    UnknownStore(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("book not found: {0}")]
    NotFound(String),
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store: {0}")]
    Store(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Db(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(violations) => {
                return (status, Json(ValidationEnvelope::new(violations))).into_response();
            }
            AppError::BadRequest(reason) => reason.clone(),
            _ if status == StatusCode::NOT_FOUND => "Book not found".to_string(),
            _ => {
                tracing::error!(error = %self, "request failed");
                "Internal Server Error".to_string()
            }
        };
        (status, Json(ErrorBody::new(status, message))).into_response()
    }
}
