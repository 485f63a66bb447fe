use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use thiserror::Error;

use super::response::ApiError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Error codes for API responses
#[derive(Debug)]
pub enum ErrorCode {
    DatabaseError,
    ValidationError,
    InternalError,
    BadRequest,
    Conflict,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Conflict => "CONFLICT",
        }
    }
}

impl AppError {
    /// Translate a database failure into the right client-facing kind.
    ///
    /// A unique violation on the users email column is a duplicate
    /// registration, not an internal fault.
    pub fn from_db(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::Conflict("A user with this email already exists".to_string());
            }
        }
        AppError::DatabaseError(err)
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::DatabaseError(_) => ErrorCode::DatabaseError,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::InternalError(_) => ErrorCode::InternalError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Conflict(_) => ErrorCode::Conflict,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        let error_code = self.error_code().as_str();

        // Internal failures keep their detail in the logs only
        let message = match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        ApiError::new(message, error_code)
    }
}

// Implement IntoResponse for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Application error: {:?}", self);

        let api_error = self.to_api_error();
        api_error.into_response()
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;
