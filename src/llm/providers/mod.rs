//! LLM provider implementations.
//!
//! `build(config, api_key)` is the factory — called once at startup.
//! Adding a new backend = new module + new match arm.

pub mod dummy;
pub mod openai;

use crate::config::LlmConfig;
use crate::llm::{LlmProvider, ProviderError};

/// Construct a `LlmProvider` from config and an optional API key.
///
/// `api_key` is sourced from `LLM_API_KEY` env (never TOML). The `openai`
/// provider requires it — a missing key is fatal at startup, not mid-session.
pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<LlmProvider, ProviderError> {
    match config.provider.as_str() {
        "dummy" => Ok(LlmProvider::Dummy(dummy::DummyProvider)),
        "openai" | "openai-compatible" => {
            let key = api_key.ok_or_else(|| {
                ProviderError::MissingApiKey("set LLM_API_KEY for the openai provider".into())
            })?;
            let oai = &config.openai;
            let p = openai::OpenAiProvider::new(
                oai.api_base_url.clone(),
                oai.model.clone(),
                oai.max_tokens,
                oai.timeout_seconds,
                key,
            )?;
            Ok(LlmProvider::OpenAi(p))
        }
        _ => Err(ProviderError::UnknownProvider(config.provider.clone())),
    }
}
