//! Chat thread model for the assistant view.
//!
//! A thread always starts with the assistant's greeting. Messages are only
//! ever appended, in arrival order; [`ChatThread::clear`] is the single way
//! to shrink it and it always leaves the greeting behind.

use chrono::{DateTime, Utc};

pub const GREETING: &str =
    "Hello! I'm your EcoCampus Assistant. How can I help you improve campus sustainability today?";

/// Canned prompts offered above the input box.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "Energy peaks info",
    "Reduce food waste",
    "Campus composting tips",
    "Water usage audit",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
}

impl Default for ChatThread {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatThread {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Model, GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(ChatRole::User, text));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(ChatRole::Model, text));
    }

    /// Drops everything except the seed greeting.
    pub fn clear(&mut self) {
        self.messages.truncate(1);
    }
}

/// Whether the send control is enabled: there is something to send and no
/// reply is outstanding.
pub fn can_send(input: &str, awaiting_reply: bool) -> bool {
    !awaiting_reply && !input.trim().is_empty()
}
