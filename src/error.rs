//! Application-wide error types.
//!
//! [`AppError`] covers fatal startup and shell errors only. Completion
//! failures are never fatal — they live in [`crate::llm::CompletionError`]
//! and are folded into the transcript by the session.

use thiserror::Error;

use crate::llm::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("llm error: {0}")]
    Llm(#[from] ProviderError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
