//! Chat panel — the conversation and the single in-flight exchange.
//!
//! One exchange is:
//! 1. `submit` appends the user turn, clears the draft and marks the panel pending
//! 2. the caller sends the returned [`Outgoing`] through a [`ChatPort`]
//! 3. `complete` appends the reply (or the fallback turn) and clears pending
//!
//! Steps 1 and 3 are synchronous so the UI can own the panel and only hand
//! the network call to the executor. [`ChatPanel::send`] runs all three
//! in one await for callers that can hold the panel across it.

use coach_types::{
    Result,
    config::PersonaConfig,
    event::PanelEvent,
    message::Message,
};
use crate::ports::ChatPort;

/// A submitted message waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub turn_id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStatus {
    Idle,
    Waiting { turn_id: u64 },
}

pub struct ChatPanel {
    /// Draft text bound to the input field
    pub input: String,
    messages: Vec<Message>,
    status: PanelStatus,
    last_error: Option<String>,
    fallback_reply: String,
    turn_counter: u64,
}

impl ChatPanel {
    pub fn new(persona: &PersonaConfig) -> Self {
        let mut messages = Vec::new();
        if !persona.greeting.is_empty() {
            messages.push(Message::assistant(&persona.greeting));
        }

        Self {
            input: String::new(),
            messages,
            status: PanelStatus::Idle,
            last_error: None,
            fallback_reply: persona.fallback_reply.clone(),
            turn_counter: 0,
        }
    }

    /// Conversation so far, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> &PanelStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, PanelStatus::Waiting { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the send button should be live
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.input.trim().is_empty()
    }

    /// Start an exchange for `text`.
    ///
    /// Returns `None` (and changes nothing) when the text is blank or an
    /// exchange is already in flight.
    pub fn submit(&mut self, text: &str) -> Option<Outgoing> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let PanelStatus::Waiting { turn_id } = self.status {
            log::warn!("Ignoring submit while turn {} is pending", turn_id);
            return None;
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;

        self.messages.push(Message::user(text));
        self.input.clear();
        self.status = PanelStatus::Waiting { turn_id };
        self.last_error = None;
        log::debug!("Turn {} submitted ({} chars)", turn_id, text.len());

        Some(Outgoing {
            turn_id,
            text: text.to_string(),
        })
    }

    /// Submit whatever is in the draft input
    pub fn submit_draft(&mut self) -> Option<Outgoing> {
        let draft = self.input.clone();
        self.submit(&draft)
    }

    /// Finish the pending exchange with its outcome.
    ///
    /// Outcomes for a turn that is not the pending one are dropped.
    pub fn complete(&mut self, turn_id: u64, outcome: Result<String>) {
        self.apply(PanelEvent::from_outcome(turn_id, outcome));
    }

    pub fn apply(&mut self, event: PanelEvent) {
        let turn_id = event.turn_id();
        if self.status != (PanelStatus::Waiting { turn_id }) {
            log::warn!("Dropping result for turn {} (status {:?})", turn_id, self.status);
            return;
        }

        match event {
            PanelEvent::ReplyReceived { text, .. } => {
                log::debug!("Turn {} answered", turn_id);
                self.messages.push(Message::assistant(text));
            }
            PanelEvent::ExchangeFailed { message, .. } => {
                log::warn!("Turn {} failed: {}", turn_id, message);
                self.last_error = Some(message);
                self.messages.push(Message::assistant(&self.fallback_reply));
            }
        }
        self.status = PanelStatus::Idle;
    }

    /// Run one full exchange: submit → port → complete.
    ///
    /// Returns `false` when the submission was ignored and no request was made.
    pub async fn send(&mut self, text: &str, port: &dyn ChatPort) -> bool {
        let Some(outgoing) = self.submit(text) else {
            return false;
        };
        let outcome = port.send_message(&outgoing.text).await;
        self.complete(outgoing.turn_id, outcome);
        true
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new(&PersonaConfig::default())
    }
}

/// Perform the network half of an exchange and package the result.
///
/// This is what the UI spawns; it does not touch the panel.
pub async fn run_exchange(port: &dyn ChatPort, outgoing: Outgoing) -> PanelEvent {
    let outcome = port.send_message(&outgoing.text).await;
    PanelEvent::from_outcome(outgoing.turn_id, outcome)
}
