//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency:
//! adding a backend = new module + new variant + new `complete` arm.

pub mod providers;

use thiserror::Error;

use crate::conversation::Message;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Startup-time provider construction failures. Fatal.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("missing API key: {0}")]
    MissingApiKey(String),
    #[error("provider init failed: {0}")]
    Init(String),
}

/// Per-request completion failures. Never fatal — the session folds every
/// variant into assistant text and the conversation continues.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Connection, timeout, or DNS failure before an HTTP status arrived.
    #[error("{0}")]
    Transport(String),
    /// Any non-2xx HTTP status. The body is deliberately not carried —
    /// callers render a fixed generic text independent of it.
    #[error("server returned HTTP {0}")]
    Status(u16),
    /// 2xx status but the payload lacked the expected shape.
    #[error("malformed response: {0}")]
    Parse(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    OpenAi(providers::openai::OpenAiProvider),
}

impl LlmProvider {
    /// Replay `messages` to the provider and return its reply text.
    ///
    /// Exactly one network call per invocation — no retries, no queuing.
    /// Concurrent invocations may overlap; the provider holds no per-call
    /// state.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(messages).await,
            LlmProvider::OpenAi(p) => p.complete(messages).await,
        }
    }
}
