//! Response controller: chat transcript plus the single result pane.
//!
//! DESIGN
//! ======
//! Submission is split into two synchronous halves around the one network
//! await: `begin_submit` performs the optimistic updates and hands back the
//! request to send, `complete` applies the response. Each request carries a
//! sequence number; a response whose number is not the latest issued one is
//! dropped, so overlapping submissions can never leave an older answer in the
//! result pane.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use crate::net::error::SubmitError;
use crate::net::types::{ChatRequest, ResponseBody, ResponsePayload, TrustedHtml};
use crate::state::chat::{ChatHistory, ERROR_NOTICE};
use crate::state::quiz::TestSession;

/// Default result pane text.
pub const PLACEHOLDER: &str =
    "Попросите что-нибудь в чате (например: \"Сделай тест\" или \"Напиши эссе\")...";

/// Transient text while a request is in flight.
pub const WORKING: &str = "Думаю...";

/// Message sent by the "create test" button.
pub const CREATE_TEST_PROMPT: &str = "Сделай тест";

/// The mutually exclusive contents of the result pane.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultView {
    #[default]
    Placeholder,
    Info(String),
    Error(String),
    Test(TestSession),
    Document(TrustedHtml),
}

/// A request that has been accepted and must now be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub seq: u64,
    pub request: ChatRequest,
}

/// Owner of the chat history pane and the result pane.
#[derive(Clone, Debug)]
pub struct ResponseController {
    history: ChatHistory,
    view: ResultView,
    latest_seq: u64,
}

impl Default for ResponseController {
    fn default() -> Self {
        Self::new(ChatHistory::with_intro())
    }
}

impl ResponseController {
    pub fn new(history: ChatHistory) -> Self {
        Self {
            history,
            view: ResultView::Placeholder,
            latest_seq: 0,
        }
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Accept a submission. Blank input is ignored and yields `None`.
    ///
    /// Appends the user turn and switches the result pane to the working
    /// state before returning the request, so the caller can only send after
    /// the optimistic updates are visible.
    pub fn begin_submit(&mut self, text: &str, context: &str) -> Option<PendingRequest> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        self.history.clear_intro();
        self.history.push_user(message);
        self.view = ResultView::Info(WORKING.to_owned());
        self.latest_seq += 1;

        Some(PendingRequest {
            seq: self.latest_seq,
            request: ChatRequest {
                message: message.to_owned(),
                context: context.to_owned(),
            },
        })
    }

    /// Apply the outcome of request `seq`. Returns `false` if it was stale.
    pub fn complete(&mut self, seq: u64, outcome: Result<ResponsePayload, SubmitError>) -> bool {
        if seq != self.latest_seq {
            leptos::logging::log!("discarding stale response {seq} (latest {})", self.latest_seq);
            return false;
        }

        let payload = match outcome {
            Ok(payload) => payload,
            Err(err) => {
                self.fail(&err);
                return true;
            }
        };

        if let Some(reply) = payload.chat_reply_text() {
            self.history.push_assistant(reply);
        }

        match payload.into_body() {
            Ok(ResponseBody::Test(questions)) => self.view = ResultView::Test(TestSession::new(questions)),
            Ok(ResponseBody::Document(html)) => self.view = ResultView::Document(html),
            Ok(ResponseBody::Placeholder) => self.view = ResultView::Placeholder,
            Err(err) => self.fail(&err),
        }
        true
    }

    /// Answer a card of the currently rendered test.
    pub fn answer(&mut self, card: usize, option: usize) -> bool {
        match &mut self.view {
            ResultView::Test(session) => session.answer(card, option),
            _ => false,
        }
    }

    /// Reset the result pane, discarding any rendered test.
    pub fn reset_placeholder(&mut self) {
        self.view = ResultView::Placeholder;
    }

    fn fail(&mut self, err: &SubmitError) {
        leptos::logging::warn!("chat submission failed: {err:?}");
        self.history.push_assistant(ERROR_NOTICE);
        self.view = ResultView::Error(err.to_string());
    }
}
