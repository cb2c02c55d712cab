use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::PollSnapshot;
use crate::error::PollError;

/// Message returned to the client after a successful reset
pub const RESET_MESSAGE: &str = "Poll has been reset";

/// A single selectable answer
///
/// The `id` is short and stable; it is what clients send when voting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    /// Identifier unique within the poll
    pub id: String,

    /// Display label
    pub text: String,

    /// Number of votes cast for this option
    pub votes: u64,
}

impl PollOption {
    pub fn new(id: &str, text: &str) -> Self {
        PollOption {
            id: id.to_string(),
            text: text.to_string(),
            votes: 0,
        }
    }
}

/// The one poll held by the server
///
/// Constructed once at startup and handed to the request handlers. The
/// option set is fixed for the lifetime of the value; only the counters
/// change.
#[derive(Debug, Clone)]
pub struct Poll {
    question: String,
    options: Vec<PollOption>,
    admin_token: String,
}

impl Poll {
    /// Create a poll with the given question and options
    ///
    /// # Arguments
    /// * `question` - Display text of the poll
    /// * `options` - Options in display order
    /// * `admin_token` - Secret required by [`Poll::reset`]
    pub fn new(question: &str, options: Vec<PollOption>, admin_token: &str) -> Self {
        Poll {
            question: question.to_string(),
            options,
            admin_token: admin_token.to_string(),
        }
    }

    /// Create the poll the server starts with
    ///
    /// All counters start at zero.
    pub fn seeded(admin_token: &str) -> Self {
        Poll::new(
            "Which language should we use for the next project?",
            vec![
                PollOption::new("a", "Rust"),
                PollOption::new("b", "Go"),
                PollOption::new("c", "TypeScript"),
                PollOption::new("d", "Python"),
            ],
            admin_token,
        )
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    /// Build the public view of the poll for one client
    ///
    /// # Arguments
    /// * `has_voted` - Whether the requesting client presented the vote flag
    pub fn snapshot(&self, has_voted: bool) -> PollSnapshot {
        PollSnapshot {
            question: self.question.clone(),
            options: self.options.clone(),
            has_voted,
        }
    }

    /// Count one vote
    ///
    /// The vote flag is checked before the option id, so a client that has
    /// already voted gets `AlreadyVoted` even for an unknown option.
    ///
    /// # Arguments
    /// * `already_voted` - Whether the client presented the vote flag
    /// * `option_id` - Id of the chosen option
    ///
    /// # Returns
    /// * `Result<&[PollOption], PollError>` - The updated options or the reason
    ///   the vote was rejected. Nothing is mutated on error.
    pub fn vote(
        &mut self,
        already_voted: bool,
        option_id: &str,
    ) -> Result<&[PollOption], PollError> {
        if already_voted {
            debug!("Rejected repeat vote for option {:?}", option_id);
            return Err(PollError::AlreadyVoted);
        }

        let option = self
            .options
            .iter_mut()
            .find(|option| option.id == option_id)
            .ok_or_else(|| PollError::OptionNotFound(option_id.to_string()))?;

        option.votes += 1;
        info!("Vote for option {:?}, now at {}", option.id, option.votes);

        Ok(&self.options)
    }

    /// Zero every counter if `token` matches the admin token
    ///
    /// Clients keep their vote cookies; clearing them is up to each client.
    pub fn reset(&mut self, token: &str) -> Result<&[PollOption], PollError> {
        if token != self.admin_token {
            warn!("Rejected poll reset with an invalid token");
            return Err(PollError::Unauthorized);
        }

        for option in self.options.iter_mut() {
            option.votes = 0;
        }
        info!("Poll reset, all counters cleared");

        Ok(&self.options)
    }

    pub fn total_votes(&self) -> u64 {
        crate::view::total_votes(&self.options)
    }
}
