//! Torrent status table state.
//!
//! # Design
//! - Rows are replaced wholesale by each poll; actions never edit them locally.
//! - The poll breaker lives next to the rows so one reducer decides whether polling continues.
//! - Placeholder selection is a pure function of the state.

use crate::core::poll::{PollBreaker, PollVerdict};
use vigilio_api_models::{TorrentCommand, TorrentStatus, TorrentStatusResponse};

/// Shown when a successful response carries no `torrents` list.
pub const MISSING_LIST_MESSAGE: &str = "There was a problem getting the list";

/// Mutable state behind the torrent table.
#[derive(Clone, Debug, PartialEq)]
pub struct TorrentTableState {
    /// Latest rows.
    pub rows: Vec<TorrentStatus>,
    /// Whether any response (or failure) has arrived.
    pub fetched: bool,
    /// Current error banner text, empty when none.
    pub error: String,
    breaker: PollBreaker,
}

/// What the table body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableBody {
    /// Nothing; an error banner is up.
    Hidden,
    /// Waiting for the first response.
    Loading,
    /// Successful response without rows.
    Empty,
    /// Render the rows.
    Rows,
}

impl TorrentTableState {
    /// Fresh state with a breaker that trips after `max_failures`.
    #[must_use]
    pub const fn new(max_failures: u32) -> Self {
        Self {
            rows: Vec::new(),
            fetched: false,
            error: String::new(),
            breaker: PollBreaker::new(max_failures),
        }
    }

    /// Apply a successful poll.
    pub fn apply_response(&mut self, response: TorrentStatusResponse) -> PollVerdict {
        self.fetched = true;
        match response.torrents {
            Some(rows) => {
                self.rows = rows;
                self.error.clear();
            }
            None => MISSING_LIST_MESSAGE.clone_into(&mut self.error),
        }
        self.breaker.record_success()
    }

    /// Apply a failed poll; [`PollVerdict::Stop`] means the interval must be dropped.
    pub fn apply_failure(&mut self, message: String) -> PollVerdict {
        self.fetched = true;
        self.error = message;
        self.breaker.record_failure()
    }

    /// Surface an action failure without touching the breaker.
    pub fn set_error(&mut self, message: String) {
        self.error = message;
    }

    /// Whether polling has stopped for good.
    #[must_use]
    pub const fn polling_stopped(&self) -> bool {
        self.breaker.is_tripped()
    }

    /// Placeholder or row rendering decision.
    #[must_use]
    pub fn body(&self) -> TableBody {
        if !self.error.is_empty() {
            TableBody::Hidden
        } else if self.rows.is_empty() && !self.fetched {
            TableBody::Loading
        } else if self.rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows
        }
    }
}

/// Delete command matching the "delete files permanently" checkbox.
#[must_use]
pub const fn delete_command(permanent: bool) -> TorrentCommand {
    if permanent {
        TorrentCommand::DeletePermanent
    } else {
        TorrentCommand::Delete
    }
}

/// Info banner shown after a row action succeeds.
#[must_use]
pub fn success_message(command: TorrentCommand) -> String {
    format!("{} operation is successful.", command.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(hash: &str) -> TorrentStatus {
        TorrentStatus {
            hash: hash.into(),
            name: format!("torrent {hash}"),
            state: "downloading".into(),
            progress: 0.5,
        }
    }

    #[test]
    fn placeholders_follow_fetch_progress() {
        let mut state = TorrentTableState::new(3);
        assert_eq!(state.body(), TableBody::Loading);
        state.apply_response(TorrentStatusResponse {
            torrents: Some(vec![]),
        });
        assert_eq!(state.body(), TableBody::Empty);
        state.apply_response(TorrentStatusResponse {
            torrents: Some(vec![row("a")]),
        });
        assert_eq!(state.body(), TableBody::Rows);
    }

    #[test]
    fn missing_list_surfaces_an_error() {
        let mut state = TorrentTableState::new(3);
        let verdict = state.apply_response(TorrentStatusResponse { torrents: None });
        assert_eq!(verdict, PollVerdict::Continue);
        assert_eq!(state.error, MISSING_LIST_MESSAGE);
        assert_eq!(state.body(), TableBody::Hidden);
    }

    #[test]
    fn third_failure_stops_polling() {
        let mut state = TorrentTableState::new(3);
        assert_eq!(state.apply_failure("down".into()), PollVerdict::Continue);
        assert_eq!(state.apply_failure("down".into()), PollVerdict::Continue);
        assert_eq!(state.apply_failure("down".into()), PollVerdict::Stop);
        assert!(state.polling_stopped());
        assert_eq!(state.body(), TableBody::Hidden);
    }

    #[test]
    fn success_between_failures_keeps_polling() {
        let mut state = TorrentTableState::new(3);
        state.apply_failure("down".into());
        state.apply_failure("down".into());
        state.apply_response(TorrentStatusResponse {
            torrents: Some(vec![row("a")]),
        });
        assert!(state.error.is_empty());
        assert_eq!(state.apply_failure("down".into()), PollVerdict::Continue);
    }

    #[test]
    fn action_messages_and_delete_variant() {
        assert_eq!(delete_command(true), TorrentCommand::DeletePermanent);
        assert_eq!(delete_command(false), TorrentCommand::Delete);
        assert_eq!(
            success_message(TorrentCommand::Pause),
            "pause operation is successful."
        );
    }
}
