//! Client-side poll view.
//!
//! Mirrors what the browser client does: which screen is shown, what it
//! does with server responses, and the percentages shown next to each
//! option. The view never invents counts; it only copies what the server
//! echoes back.

use crate::api::{PollSnapshot, ResetResponse, VoteResponse};
use crate::poll::PollOption;

/// Cookie string a browser writes to drop its vote flag
pub const CLEAR_VOTE_COOKIE: &str = "voted=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Voting,
    Results,
}

/// Returned by [`PollView::reset_succeeded`]: the client must drop its own
/// `voted` cookie, since the server never clears it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearVoteCookie;

/// One line of the results screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub id: String,
    pub text: String,
    pub votes: u64,
    pub percentage: u32,
}

#[derive(Debug, Clone)]
pub struct PollView {
    question: String,
    options: Vec<PollOption>,
    has_voted: bool,
    screen: Screen,
    token_input: String,
    notice: Option<String>,
}

impl PollView {
    /// Build the view from a freshly loaded poll
    ///
    /// Clients that already voted go straight to the results.
    pub fn from_snapshot(snapshot: PollSnapshot) -> Self {
        let screen = if snapshot.has_voted {
            Screen::Results
        } else {
            Screen::Voting
        };

        PollView {
            question: snapshot.question,
            options: snapshot.options,
            has_voted: snapshot.has_voted,
            screen,
            token_input: String::new(),
            notice: None,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn token_input(&self) -> &str {
        &self.token_input
    }

    /// Last message the user should see, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// "View results without voting"; local only, no request is made
    pub fn show_results(&mut self) {
        self.screen = Screen::Results;
    }

    /// Go back to the voting screen
    ///
    /// Only offered while the client has not voted; returns whether the
    /// screen changed.
    pub fn back_to_voting(&mut self) -> bool {
        if self.has_voted {
            return false;
        }
        self.screen = Screen::Voting;
        true
    }

    pub fn set_token_input(&mut self, token: &str) {
        self.token_input = token.to_string();
    }

    pub fn vote_succeeded(&mut self, response: VoteResponse) {
        self.options = response.options;
        self.has_voted = true;
        self.screen = Screen::Results;
    }

    /// Surface a server or network failure without touching any state
    pub fn request_failed(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    pub fn reset_succeeded(&mut self, response: ResetResponse) -> ClearVoteCookie {
        self.options = response.options;
        self.has_voted = false;
        self.screen = Screen::Voting;
        self.token_input.clear();
        self.notice = Some(response.message);
        ClearVoteCookie
    }

    pub fn total_votes(&self) -> u64 {
        total_votes(&self.options)
    }

    pub fn results(&self) -> Vec<ResultRow> {
        self.options
            .iter()
            .zip(percentages(&self.options))
            .map(|(option, percentage)| ResultRow {
                id: option.id.clone(),
                text: option.text.clone(),
                votes: option.votes,
                percentage,
            })
            .collect()
    }
}

pub fn total_votes(options: &[PollOption]) -> u64 {
    options.iter().map(|option| option.votes).sum()
}

/// Share of the total for each option, rounded half up to a whole percent
///
/// Every share is 0 when nobody has voted yet.
pub fn percentages(options: &[PollOption]) -> Vec<u32> {
    let total = total_votes(options);
    if total == 0 {
        return vec![0; options.len()];
    }

    options
        .iter()
        .map(|option| ((option.votes * 200 + total) / (total * 2)) as u32)
        .collect()
}
