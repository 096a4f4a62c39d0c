use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Canned API that records every request it receives.
struct FakeApi {
    result: Result<String, ApiError>,
    calls: RefCell<Vec<(Endpoint, ExtractionRequest)>>,
}

impl FakeApi {
    fn answering(text: &str) -> Self {
        Self { result: Ok(text.to_owned()), calls: RefCell::default() }
    }

    fn failing(err: ApiError) -> Self {
        Self { result: Err(err), calls: RefCell::default() }
    }
}

impl ExtractionApi for FakeApi {
    async fn extract(&self, endpoint: Endpoint, request: &ExtractionRequest) -> Result<String, ApiError> {
        self.calls.borrow_mut().push((endpoint, request.clone()));
        self.result.clone()
    }
}

fn submit(state: &mut ChatState, api: &FakeApi, endpoint: Endpoint) {
    let submission = state.begin_submit(endpoint);
    assert!(state.loading, "loading must be set before the request is sent");
    let settlement = block_on(fetch_answer(api, submission));
    assert!(state.settle(settlement));
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.prompt.is_empty());
    assert!(state.response.is_empty());
    assert!(!state.loading);
    assert_eq!(state.phase(), ChatPhase::Idle);
    assert_eq!(state.last_outcome, None);
    assert_eq!(state.latest_seq(), 0);
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_sets_loading_and_clears_response() {
    let mut state = ChatState {
        prompt: "parcare".to_owned(),
        response: "old answer".to_owned(),
        ..ChatState::default()
    };
    let submission = state.begin_submit(Endpoint::General);

    assert!(state.loading);
    assert_eq!(state.phase(), ChatPhase::Submitting);
    assert!(state.response.is_empty());
    assert_eq!(submission.seq, 1);
    assert_eq!(submission.endpoint, Endpoint::General);
    assert_eq!(submission.request, ExtractionRequest::romanian("parcare"));
}

#[test]
fn begin_submit_allows_empty_prompt() {
    let mut state = ChatState::default();
    let submission = state.begin_submit(Endpoint::Timpark);
    assert_eq!(submission.request.user_query, "");
    assert!(!submission.request.english);
}

// =============================================================
// Full submission cycle
// =============================================================

#[test]
fn successful_submission_shows_answer() {
    let api = FakeApi::answering("Hello");
    let mut state = ChatState { prompt: "test".to_owned(), ..ChatState::default() };

    submit(&mut state, &api, Endpoint::General);

    assert_eq!(state.response, "Hello");
    assert!(!state.loading);
    assert_eq!(state.last_outcome, Some(Outcome::Success));
    assert_eq!(
        api.calls.borrow().as_slice(),
        &[(Endpoint::General, ExtractionRequest::romanian("test"))]
    );
}

#[test]
fn status_failure_shows_fixed_error() {
    let api = FakeApi::failing(ApiError::Status(500));
    let mut state = ChatState { prompt: "test".to_owned(), ..ChatState::default() };

    submit(&mut state, &api, Endpoint::Timpark);

    assert_eq!(state.response, FETCH_ERROR_MESSAGE);
    assert!(!state.loading);
    assert_eq!(state.last_outcome, Some(Outcome::Failure));
}

#[test]
fn every_failure_kind_collapses_to_the_same_message() {
    for err in [
        ApiError::Network("connection refused".to_owned()),
        ApiError::Status(404),
        ApiError::Payload("missing field `raspuns_final`".to_owned()),
        ApiError::Unavailable,
    ] {
        let api = FakeApi::failing(err);
        let mut state = ChatState::default();
        submit(&mut state, &api, Endpoint::General);
        assert_eq!(state.response, FETCH_ERROR_MESSAGE);
        assert!(!state.loading);
    }
}

#[test]
fn loading_clears_for_any_prompt_and_outcome() {
    for prompt in ["", "test", "Ce HCL-uri privesc parcarea?", "  \n  "] {
        for api in [FakeApi::answering("ok"), FakeApi::failing(ApiError::Status(503))] {
            let mut state = ChatState { prompt: prompt.to_owned(), ..ChatState::default() };
            submit(&mut state, &api, Endpoint::General);
            assert!(!state.loading, "loading stuck for prompt {prompt:?}");
            assert_eq!(state.phase(), ChatPhase::Idle);
        }
    }
}

#[test]
fn resubmitting_after_failure_recovers() {
    let mut state = ChatState::default();
    submit(&mut state, &FakeApi::failing(ApiError::Status(500)), Endpoint::General);
    submit(&mut state, &FakeApi::answering("Second try"), Endpoint::General);

    assert_eq!(state.response, "Second try");
    assert_eq!(state.last_outcome, Some(Outcome::Success));
}

#[test]
fn answer_text_is_kept_verbatim() {
    let markup = "<b>Taxa</b> & <i>abonament</i>";
    let mut state = ChatState::default();
    submit(&mut state, &FakeApi::answering(markup), Endpoint::Timpark);
    assert_eq!(state.response, markup);
}

// =============================================================
// Stale results
// =============================================================

#[test]
fn stale_result_is_discarded_while_newer_submission_is_in_flight() {
    let mut state = ChatState::default();
    let first = state.begin_submit(Endpoint::General);
    let second = state.begin_submit(Endpoint::General);

    let applied = state.settle(Settlement { seq: first.seq, result: Ok("old".to_owned()) });
    assert!(!applied);
    assert!(state.loading, "stale completion must not clear loading");
    assert!(state.response.is_empty());

    assert!(state.settle(Settlement { seq: second.seq, result: Ok("new".to_owned()) }));
    assert_eq!(state.response, "new");
    assert!(!state.loading);
}

#[test]
fn stale_result_after_newer_settled_is_discarded() {
    let mut state = ChatState::default();
    let first = state.begin_submit(Endpoint::General);
    let second = state.begin_submit(Endpoint::General);

    assert!(state.settle(Settlement { seq: second.seq, result: Ok("new".to_owned()) }));
    assert!(!state.settle(Settlement { seq: first.seq, result: Err(ApiError::Status(500)) }));

    assert_eq!(state.response, "new");
    assert_eq!(state.last_outcome, Some(Outcome::Success));
    assert!(!state.loading);
}

#[test]
fn sequence_numbers_increase_per_submission() {
    let mut state = ChatState::default();
    let seqs: Vec<u64> = (0..3).map(|_| state.begin_submit(Endpoint::Timpark).seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
    assert_eq!(state.latest_seq(), 3);
}
