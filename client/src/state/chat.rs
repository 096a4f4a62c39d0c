//! Per-view chat state and the submission lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each chat page creates one `ChatState` when it mounts, so navigating away
//! and back always starts from an empty prompt and response.
//!
//! A submission moves the state `Idle -> Submitting -> Idle`, ending in either
//! a success (answer text shown) or a failure (fixed error message shown).
//! Submissions are numbered; a completion that does not belong to the latest
//! submission is dropped so a slow earlier request cannot overwrite a newer
//! one or clear its loading flag.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ExtractionApi;
use crate::net::types::{ApiError, Endpoint, ExtractionRequest};

/// The only failure text the user ever sees.
pub const FETCH_ERROR_MESSAGE: &str = "Error occurred while fetching response";

/// Coarse lifecycle position of a chat view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    /// Awaiting input; no request in flight.
    #[default]
    Idle,
    /// A request is in flight; the loading overlay is shown.
    Submitting,
}

/// How the most recent applied submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Prompt text bound to the textarea.
    pub prompt: String,
    /// Answer text or [`FETCH_ERROR_MESSAGE`]; empty until the first settle.
    pub response: String,
    /// True from submit until the latest submission settles.
    pub loading: bool,
    /// Outcome of the last applied submission, `None` before any.
    pub last_outcome: Option<Outcome>,
    latest_seq: u64,
}

/// One outgoing request, tagged with its sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub endpoint: Endpoint,
    pub request: ExtractionRequest,
}

/// Completion of a [`Submission`], ready to be applied with [`ChatState::settle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub seq: u64,
    pub result: Result<String, ApiError>,
}

impl ChatState {
    pub fn phase(&self) -> ChatPhase {
        if self.loading { ChatPhase::Submitting } else { ChatPhase::Idle }
    }

    /// Sequence number of the newest submission, 0 before any.
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Enter `Submitting`: set loading, clear the response, and hand back the
    /// request to send. The prompt is sent as typed, even when empty.
    pub fn begin_submit(&mut self, endpoint: Endpoint) -> Submission {
        self.latest_seq += 1;
        self.loading = true;
        self.response.clear();
        Submission {
            seq: self.latest_seq,
            endpoint,
            request: ExtractionRequest::romanian(self.prompt.clone()),
        }
    }

    /// Apply a completed submission. Returns `false` and leaves the state
    /// untouched when `settlement` is stale.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        if settlement.seq != self.latest_seq {
            log::debug!(
                "dropping stale extraction result #{} (latest #{})",
                settlement.seq,
                self.latest_seq
            );
            return false;
        }

        match settlement.result {
            Ok(answer) => {
                self.response = answer;
                self.last_outcome = Some(Outcome::Success);
            }
            Err(_) => {
                self.response = FETCH_ERROR_MESSAGE.to_owned();
                self.last_outcome = Some(Outcome::Failure);
            }
        }
        self.loading = false;
        true
    }
}

/// Send `submission` through `api` and wrap whatever comes back.
///
/// Always produces a [`Settlement`], so the caller's loading flag is cleared
/// on every exit path. Failures are logged with their cause before being
/// collapsed into the user-facing message by [`ChatState::settle`].
pub async fn fetch_answer<A: ExtractionApi>(api: &A, submission: Submission) -> Settlement {
    let Submission { seq, endpoint, request } = submission;
    log::debug!("extraction #{seq} -> {}", endpoint.path());

    let result = api.extract(endpoint, &request).await;
    if let Err(err) = &result {
        log::error!("extraction #{seq} on {} failed: {err}", endpoint.path());
    }
    Settlement { seq, result }
}
