use thiserror::Error;

#[cfg(feature = "web")]
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures a poll operation can report back to the caller
///
/// None of these are fatal to the process; each one maps to a single
/// HTTP status with a human readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The client already carries the `voted` cookie
    #[error("already voted")]
    AlreadyVoted,

    /// The requested option id is not part of the poll
    #[error("option not found")]
    OptionNotFound(String),

    /// The reset token did not match the configured admin token
    #[error("invalid reset token")]
    Unauthorized,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {source}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

#[cfg(feature = "web")]
impl PollError {
    pub fn status(&self) -> StatusCode {
        match self {
            PollError::AlreadyVoted => StatusCode::FORBIDDEN,
            PollError::OptionNotFound(_) => StatusCode::NOT_FOUND,
            PollError::Unauthorized => StatusCode::FORBIDDEN,
        }
    }
}

#[cfg(feature = "web")]
impl IntoResponse for PollError {
    fn into_response(self) -> Response {
        let body = crate::api::ErrorResponse {
            success: false,
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
