//! Wire types for the chat endpoint.
//!
//! DESIGN
//! ======
//! The payload is decoded leniently (`serde_json::Value` for every field) so a
//! sloppy backend reply degrades to a placeholder instead of a decode error.
//! Only `type: "test"` enforces a shape, because rendering a half-parsed test
//! would be worse than reporting it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SubmitError;
use crate::state::quiz::TestQuestion;

/// Body of `POST /api/chat/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: String,
}

/// Declared kind of a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    Chat,
    Test,
    Document,
    Unknown,
}

impl ResponseKind {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("chat") => Self::Chat,
            Some("test") => Self::Test,
            Some("document") => Self::Document,
            _ => Self::Unknown,
        }
    }
}

/// HTML that the backend has already sanitized.
///
/// This is the only path by which markup reaches `inner_html`. It can only be
/// built from a decoded `document` response; the backend owns sanitization
/// and the UI inserts the text as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub(crate) fn from_server(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw response body as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ResponsePayload {
    #[serde(default)]
    pub chat_reply: Option<Value>,
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// What the result pane should show for a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Test(Vec<TestQuestion>),
    Document(TrustedHtml),
    Placeholder,
}

impl ResponsePayload {
    pub fn kind(&self) -> ResponseKind {
        ResponseKind::from_value(self.kind.as_ref())
    }

    /// Chat reply worth showing in history.
    ///
    /// Skips missing, non-string and blank replies, and replies that look like
    /// leaked JSON (start with `{` once trimmed).
    pub fn chat_reply_text(&self) -> Option<&str> {
        let text = self.chat_reply.as_ref()?.as_str()?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('{') {
            return None;
        }
        Some(text)
    }

    /// The `error` field when it carries text.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Interpret `type`/`content`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidTestFormat`] when a `test` response does
    /// not carry a list of well-formed questions.
    pub fn into_body(self) -> Result<ResponseBody, SubmitError> {
        match self.kind() {
            ResponseKind::Test => {
                let Some(Value::Array(items)) = self.content else {
                    return Err(SubmitError::InvalidTestFormat);
                };
                let questions = items
                    .into_iter()
                    .map(serde_json::from_value::<TestQuestion>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| SubmitError::InvalidTestFormat)?;
                Ok(ResponseBody::Test(questions))
            }
            ResponseKind::Document => {
                let html = match self.content {
                    None | Some(Value::Null) => String::new(),
                    Some(Value::String(s)) => s,
                    Some(other) => other.to_string(),
                };
                Ok(ResponseBody::Document(TrustedHtml::from_server(html)))
            }
            ResponseKind::Chat | ResponseKind::Unknown => Ok(ResponseBody::Placeholder),
        }
    }
}
