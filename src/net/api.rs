//! REST helper for the chat endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR) and native tests: a stub error, since the endpoint is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and body failures all come back as [`SubmitError`] so
//! the caller has exactly one error path to render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::SubmitError;
use super::types::{ChatRequest, ResponsePayload};

/// Chat endpoint path.
pub const CHAT_ENDPOINT: &str = "/api/chat/";
/// Cookie holding the anti-forgery token.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the token is echoed in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Turn an HTTP status and raw body into a payload.
///
/// The body is parsed before the status is checked so that a failing
/// response can still contribute its `error` text.
///
/// # Errors
///
/// [`SubmitError::MalformedResponse`] for a non-JSON body and
/// [`SubmitError::Server`] for a non-2xx status.
pub fn decode_response(status: u16, body: &str) -> Result<ResponsePayload, SubmitError> {
    let payload: ResponsePayload =
        serde_json::from_str(body).map_err(|_| SubmitError::MalformedResponse { status })?;
    if !(200..300).contains(&status) {
        return Err(SubmitError::server(status, payload.error_message()));
    }
    Ok(payload)
}

/// Header pair to attach when a token is available.
pub fn csrf_header(token: Option<String>) -> Option<(&'static str, String)> {
    token.filter(|t| !t.is_empty()).map(|t| (CSRF_HEADER, t))
}

/// Send one chat request via `POST /api/chat/`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the body is not JSON, or
/// the server responds with a non-OK status.
pub async fn post_chat(request: &ChatRequest) -> Result<ResponsePayload, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::post(CHAT_ENDPOINT);
        if let Some((name, token)) = csrf_header(crate::util::cookie::read(CSRF_COOKIE)) {
            builder = builder.header(name, &token);
        }
        let resp = builder
            .json(request)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|_| SubmitError::MalformedResponse { status })?;
        decode_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SubmitError::Network("not available on server".to_owned()))
    }
}
