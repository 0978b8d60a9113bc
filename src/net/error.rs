//! Submission failure kinds.
//!
//! ERROR HANDLING
//! ==============
//! Every failure between "request issued" and "result rendered" collapses into
//! one `SubmitError`. Its `Display` text is exactly what the result pane shows,
//! so components never format errors themselves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error produced while sending a chat request or interpreting its response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(String),
    /// The response body was not JSON.
    #[error("Сервер вернул не-JSON. Статус: {status}")]
    MalformedResponse { status: u16 },
    /// Non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// `type` was `test` but `content` was not a list of questions.
    #[error("Неверный формат теста (ожидался массив вопросов).")]
    InvalidTestFormat,
}

impl SubmitError {
    /// Server failure using the body's `error` text when it has one.
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Ошибка сервера. Статус: {status}"));
        Self::Server { status, message }
    }
}
