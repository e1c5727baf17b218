use serde::{Deserialize, Serialize};
use crate::error::CoachError;

/// Completion of a background exchange, delivered back to the panel
/// on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelEvent {
    /// The backend answered with a reply
    ReplyReceived { turn_id: u64, text: String },

    /// The exchange failed for any reason
    ExchangeFailed { turn_id: u64, message: String },
}

impl PanelEvent {
    pub fn from_outcome(turn_id: u64, outcome: Result<String, CoachError>) -> Self {
        match outcome {
            Ok(text) => PanelEvent::ReplyReceived { turn_id, text },
            Err(e) => PanelEvent::ExchangeFailed {
                turn_id,
                message: e.to_string(),
            },
        }
    }

    pub fn turn_id(&self) -> u64 {
        match self {
            PanelEvent::ReplyReceived { turn_id, .. }
            | PanelEvent::ExchangeFailed { turn_id, .. } => *turn_id,
        }
    }
}
