//! HTTP chat adapter.
//!
//! Posts `{"message": ...}` to the resolved endpoint and expects
//! `{"reply": ...}` back. Uses browser `fetch()` via gloo-net for
//! WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;

use coach_core::ports::ChatPort;
use coach_types::{
    CoachError, Result,
    config::EndpointConfig,
    wire::{ChatReply, ChatRequest},
};
use crate::endpoint::detect_endpoint;

/// `ChatPort` backed by a single JSON endpoint
pub struct HttpChatClient {
    endpoint: String,
}

impl HttpChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Resolve the endpoint for the current page once and bind to it
    pub fn from_config(config: &EndpointConfig) -> Self {
        Self::new(detect_endpoint(config))
    }
}

#[async_trait(?Send)]
impl ChatPort for HttpChatClient {
    async fn send_message(&self, text: &str) -> Result<String> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ChatRequest::new(text))
            .map_err(|e| CoachError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| CoachError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if is_success(status) => return Err(CoachError::Network(e.to_string())),
            // the status alone decides a non-2xx outcome
            Err(_) => String::new(),
        };

        if !is_success(status) {
            log::warn!("Chat endpoint returned {} {}: {}", status, status_text, body);
        }

        interpret_response(status, &status_text, &body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a finished HTTP response into the reply text.
///
/// Any 2xx with a JSON object holding a string `reply` succeeds.
/// A 2xx without `reply` is a failure, not an empty reply.
pub fn interpret_response(status: u16, status_text: &str, body: &str) -> Result<String> {
    if !is_success(status) {
        return Err(CoachError::Status {
            status,
            status_text: status_text.to_string(),
        });
    }

    serde_json::from_str::<ChatReply>(body)
        .map(|r| r.reply)
        .map_err(|e| CoachError::MalformedReply(e.to_string()))
}
