//! Conversation store — an append-only ordered sequence of chat turns.
//!
//! Seeded with exactly one system message; grows by `push_user` /
//! `push_assistant` only. Messages are never mutated, removed, or
//! reordered, and the same [`Message`] struct is serialized verbatim into
//! the outbound request body so the remote model replays the conversation
//! in exact chronological order.

use serde::{Deserialize, Serialize};

/// Speaker role of a chat turn. Serialized lowercase to match the
/// chat-completions wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One chat turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Ordered, append-only message history for one session.
///
/// The first element is the sole system message and is never removed or
/// reordered. Strict user/assistant alternation is not enforced: duplicate
/// user messages without an intervening reply are permitted and retained.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a conversation seeded with the fixed system instruction.
    pub fn new(system_prompt: &str) -> Self {
        Self {
            messages: vec![Message::new(Role::System, system_prompt)],
        }
    }

    /// Append a user message. Blank or whitespace-only text is rejected
    /// silently — no append, and the caller must issue no request.
    /// Returns whether the message was appended.
    pub fn push_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(Message::new(Role::User, text));
        true
    }

    /// Append an assistant message. Called after every round-trip —
    /// on failure the failure text itself is the content, so the
    /// conversation never dangles awaiting a reply.
    pub fn push_assistant(&mut self, text: &str) {
        self.messages.push(Message::new(Role::Assistant, text));
    }

    /// All messages in insertion order, system message first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true — a conversation always holds its system message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
