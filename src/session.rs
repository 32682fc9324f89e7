//! Chat session — one conversation, one provider, one UI sink.
//!
//! `submit()` is the whole round-trip policy: blank input is ignored,
//! every accepted user message gets exactly one assistant message appended
//! after it, and failures are rendered as assistant text instead of being
//! raised — the session itself never errors and the conversation never
//! dangles awaiting a reply.

use tracing::debug;

use crate::conversation::Conversation;
use crate::llm::{CompletionError, LlmProvider};

/// Transcript label for user turns.
pub const SPEAKER_USER: &str = "You";
/// Transcript label for assistant turns.
pub const SPEAKER_ASSISTANT: &str = "Bot";

/// Fixed text shown for any non-2xx response, independent of its body.
const SERVER_ERROR_TEXT: &str = "Server response error";

/// Presentation boundary — the core is agnostic to how turns are displayed.
///
/// Implementations receive one callback per appended message, in append
/// order.
pub trait ChatUi {
    fn message_appended(&self, speaker: &str, text: &str);
}

pub struct ChatSession<U: ChatUi> {
    conversation: Conversation,
    provider: LlmProvider,
    ui: U,
}

impl<U: ChatUi> ChatSession<U> {
    pub fn new(system_prompt: &str, provider: LlmProvider, ui: U) -> Self {
        Self {
            conversation: Conversation::new(system_prompt),
            provider,
            ui,
        }
    }

    /// Run one round-trip for `text`.
    ///
    /// Returns `false` when the input was blank (nothing appended, no
    /// request issued), `true` after a completed round-trip — successful
    /// or not.
    pub async fn submit(&mut self, text: &str) -> bool {
        if !self.conversation.push_user(text) {
            debug!("blank input ignored");
            return false;
        }
        self.ui.message_appended(SPEAKER_USER, text);

        let reply = match self.provider.complete(self.conversation.messages()).await {
            Ok(text) => text,
            Err(CompletionError::Status(code)) => {
                debug!(code, "rendering fixed server error text");
                SERVER_ERROR_TEXT.to_string()
            }
            Err(e @ (CompletionError::Transport(_) | CompletionError::Parse(_))) => {
                format!("Error: {e}")
            }
        };

        self.conversation.push_assistant(&reply);
        self.ui.message_appended(SPEAKER_ASSISTANT, &reply);
        true
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }
}
