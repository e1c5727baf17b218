use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoachError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to get response: {}", describe_status(.status, .status_text))]
    Status { status: u16, status_text: String },

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for CoachError {
    fn from(e: serde_json::Error) -> Self {
        CoachError::Serialization(e.to_string())
    }
}

// HTTP/2 responses carry no reason phrase, so fall back to the code.
fn describe_status(status: &u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        status_text.to_string()
    }
}
