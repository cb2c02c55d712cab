//! JSON bodies exchanged between the poll server and its clients.
//!
//! Field names follow the browser client's camelCase convention
//! (`hasVoted`, `optionId`).

use serde::{Deserialize, Serialize};

use crate::poll::PollOption;

/// Public view of the poll returned by `GET /api/poll`
///
/// Never carries the admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollSnapshot {
    pub question: String,
    pub options: Vec<PollOption>,
    pub has_voted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub option_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResponse {
    pub success: bool,
    pub options: Vec<PollOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
    pub options: Vec<PollOption>,
}

/// Body sent with every rejected vote or reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Backend is running".to_string(),
        }
    }
}
