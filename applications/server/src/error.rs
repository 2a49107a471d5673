/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ResponseError {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ServerError {
    /// Error raised by the use case or repository
    #[error(transparent)]
    Domain(#[from] RosterError),

    /// Body could not be bound to the request type
    #[error("{0}")]
    Unprocessable(String),

    /// Body was bound but failed validation
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Domain(err) => match err {
                RosterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                RosterError::NotFound => StatusCode::NOT_FOUND,
                RosterError::Conflict => StatusCode::CONFLICT,
                RosterError::BadInput(_)
                | RosterError::Timeout
                | RosterError::UnexpectedRowsAffected(_)
                | RosterError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ResponseError {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
