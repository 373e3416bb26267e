//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::{DayParseError, TimeParseError};
use crate::solver::SolveError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested course(s) absent from the catalogue
    UnknownCourse(String),
    /// Invalid request constraints (times, days, cap)
    InvalidConstraint(String),
    /// Resource not found
    NotFound(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::UnknownCourse(msg) => {
                (StatusCode::NOT_FOUND, ApiError::new("UNKNOWN_COURSE", msg))
            }
            AppError::InvalidConstraint(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_CONSTRAINT", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<SolveError> for AppError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::UnknownCourses(_) => AppError::UnknownCourse(err.to_string()),
            SolveError::EmptyWindow { .. } | SolveError::NoDaysAllowed | SolveError::ZeroCap => {
                AppError::InvalidConstraint(err.to_string())
            }
        }
    }
}

impl From<TimeParseError> for AppError {
    fn from(err: TimeParseError) -> Self {
        AppError::InvalidConstraint(err.to_string())
    }
}

impl From<DayParseError> for AppError {
    fn from(err: DayParseError) -> Self {
        AppError::InvalidConstraint(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
