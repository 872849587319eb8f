use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use board_types::api::{ErrorDetail, ErrorEnvelope};

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Database is not connected")]
    NotConnected,

    #[error("{0:#}")]
    Database(#[from] anyhow::Error),

    #[error("Message validation failed: {path}: Cast to string failed for value {value} at path \"{path}\"")]
    Cast { path: &'static str, value: String },

    #[error("{0}")]
    MalformedBody(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BoardError {
    /// Short kind name serialized as `error.name`.
    pub fn name(&self) -> &'static str {
        match self {
            BoardError::NotConnected => "ConnectionError",
            BoardError::Database(_) => "DatabaseError",
            BoardError::Cast { .. } => "ValidationError",
            BoardError::MalformedBody(_) => "SyntaxError",
            BoardError::Task(_) => "TaskError",
        }
    }

    pub fn with_status(self, status: &'static str) -> RouteFailure {
        RouteFailure { error: self, status }
    }
}

/// A failed route: the underlying error plus the status string the route
/// reports. Every failure is answered with 400.
#[derive(Debug)]
pub struct RouteFailure {
    pub error: BoardError,
    pub status: &'static str,
}

impl IntoResponse for RouteFailure {
    fn into_response(self) -> Response {
        error!("{}: {}", self.status, self.error);

        let body = ErrorEnvelope {
            error: ErrorDetail {
                name: self.error.name().to_string(),
                message: self.error.to_string(),
            },
            status: self.status.to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
