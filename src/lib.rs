//! chat-console — a console chat client for OpenAI-compatible completion
//! APIs.
//!
//! Two core components: [`conversation::Conversation`], an append-only
//! message store seeded with a fixed system instruction, and
//! [`llm::LlmProvider`], which replays the conversation to a remote
//! chat-completion endpoint and yields the assistant reply.
//! [`session::ChatSession`] glues them to a [`session::ChatUi`]
//! presentation seam; [`console`] is the stdin/stdout implementation.

pub mod config;
pub mod console;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod logger;
pub mod session;
