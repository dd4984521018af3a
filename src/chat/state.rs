//! Conversation state — message history and the submission flag.
//!
//! DESIGN
//! ======
//! `Conversation` is the only write path to history. History is append-only
//! and messages are immutable once created. At most one submission is
//! pending at a time; a pending conversation rejects further submissions
//! instead of queueing them.

use serde_json::Value;
use uuid::Uuid;

use crate::flow::FlowError;

// =============================================================================
// MESSAGE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: String,
    role: Role,
    display_text: String,
    raw_payload: Option<Value>,
}

impl Message {
    fn new(role: Role, display_text: String, raw_payload: Option<Value>) -> Self {
        Self { id: Uuid::now_v7().to_string(), role, display_text, raw_payload }
    }

    fn user(text: &str) -> Self {
        Self::new(Role::User, text.to_string(), None)
    }

    fn assistant(payload: Value) -> Self {
        let display_text = match &payload {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self::new(Role::Assistant, display_text, Some(payload))
    }

    fn error(err: &FlowError) -> Self {
        Self::new(Role::Assistant, format!("Error: {err}"), None)
    }

    /// Unique, creation-time ordered identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Decoded response body. `None` for user messages and errors.
    #[must_use]
    pub fn raw_payload(&self) -> Option<&Value> {
        self.raw_payload.as_ref()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.role == Role::Assistant && self.raw_payload.is_none()
    }
}

// =============================================================================
// CONVERSATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    state: SubmissionState,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Whether `text` would be accepted by [`Conversation::begin_submission`].
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !self.is_pending() && !text.trim().is_empty()
    }

    /// Record a user message and enter the pending state.
    ///
    /// Returns the trimmed utterance to send, or `None` when the text is
    /// blank or a submission is already pending. A rejected call leaves the
    /// conversation untouched.
    pub fn begin_submission(&mut self, text: &str) -> Option<String> {
        if !self.can_submit(text) {
            return None;
        }
        let utterance = text.trim().to_string();
        self.messages.push(Message::user(&utterance));
        self.state = SubmissionState::Pending;
        Some(utterance)
    }

    /// Record the outcome of the pending submission and return to idle.
    ///
    /// Returns the appended assistant message, or `None` if nothing was
    /// pending (the outcome is stale and dropped).
    pub fn resolve(&mut self, outcome: Result<Value, FlowError>) -> Option<&Message> {
        if !self.is_pending() {
            return None;
        }
        let message = match outcome {
            Ok(payload) => Message::assistant(payload),
            Err(err) => Message::error(&err),
        };
        self.messages.push(message);
        self.state = SubmissionState::Idle;
        self.messages.last()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
