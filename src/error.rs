use std::any::Any;

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::Method,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{models::web::WebResponse, utils::validation::ValidationError};

// Todo lo que puede cortar una petición termina aquí y sale como WebResponse
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),
    #[error("failed to decode request body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid path parameter: {0}")]
    Path(#[from] PathRejection),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn category_not_found() -> Self {
        AppError::NotFound("category is not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Body(_)
            | AppError::Decode(_)
            | AppError::Path(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Unauthorized => WebResponse::empty(status).into_response(),
            AppError::NotFound(message) => {
                tracing::debug!("404: {}", message);
                WebResponse::new(status, Some(message)).into_response()
            }
            AppError::MethodNotAllowed(method) => {
                WebResponse::new(status, Some(format!("method {} not allowed", method)))
                    .into_response()
            }
            AppError::Validation(errors) => {
                tracing::debug!("400: {}", errors);
                WebResponse::new(status, Some(errors.to_string())).into_response()
            }
            other => {
                tracing::error!("Error interno: {:?}", other);
                WebResponse::new(status, Some(other.to_string())).into_response()
            }
        }
    }
}

// Para CatchPanicLayer: un panic en un handler también sale como 500 en JSON
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("panic: {}", detail)).into_response()
}
