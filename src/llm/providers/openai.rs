//! OpenAI-compatible chat completion provider (`/v1/chat/completions`).
//!
//! Exposes a single `complete(&[Message]) -> String` interface matching the
//! `LlmProvider` abstraction. All wire types beyond [`Message`] are private
//! to this module — callers never see them. One round-trip per call, no
//! retries; history management is the session's responsibility.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::conversation::Message;
use crate::llm::{CompletionError, ProviderError};

// ── Public provider ───────────────────────────────────────────────────────────

/// Adapter for any HTTP endpoint implementing `/v1/chat/completions`.
///
/// Covers OpenAI, OpenAI-compatible local servers (Ollama, LM Studio…),
/// and hosted alternatives. Constructed once at startup, then cheaply cloned
/// because `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_base_url: String,
    model: String,
    max_tokens: u32,
    api_key: String,
}

impl OpenAiProvider {
    /// Build a provider from config values and the API key.
    ///
    /// The key is sent as `Authorization: Bearer <key>` on every request.
    pub fn new(
        api_base_url: String,
        model: String,
        max_tokens: u32,
        timeout_seconds: u64,
        api_key: String,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Init(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, api_base_url, model, max_tokens, api_key })
    }

    /// Replay the full conversation and return the first choice's content,
    /// trimmed of surrounding whitespace.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
        };

        debug!(
            model = %self.model,
            max_tokens = self.max_tokens,
            message_count = messages.len(),
            "sending completion request"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            let json = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>"));
            trace!(payload = %json, "full request payload");
        }

        let response = self
            .client
            .post(&self.api_base_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.api_base_url, error = %e, "completion request failed (transport)");
                CompletionError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            error!(%status, body = %body, "completion request returned HTTP error");
            return Err(CompletionError::Status(status.as_u16()));
        }

        let parsed = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            error!(error = %e, "failed to deserialize completion response");
            CompletionError::Parse(e.to_string())
        })?;

        debug!(choices = parsed.choices.len(), "received completion response");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                CompletionError::Parse("missing choices[0].message.content".into())
            })
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Role;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(base: &str) -> OpenAiProvider {
        OpenAiProvider::new(
            format!("{base}/v1/chat/completions"),
            "test-model".into(),
            500,
            5,
            "sk-test".into(),
        )
        .unwrap()
    }

    fn one_turn() -> Vec<Message> {
        vec![
            Message { role: Role::System, content: "sys".into() },
            Message { role: Role::User, content: "hi".into() },
        ]
    }

    #[tokio::test]
    async fn success_extracts_and_trims_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({"model": "test-model", "max_tokens": 500})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "  Hello  "}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider(&server.uri()).complete(&one_turn()).await.unwrap();
        assert_eq!(text, "Hello");
    }

    #[tokio::test]
    async fn request_body_replays_conversation_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "ok"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(provider(&server.uri()).complete(&one_turn()).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn non_success_status_yields_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = provider(&server.uri()).complete(&one_turn()).await.unwrap_err();
        assert!(matches!(err, CompletionError::Status(500)));
    }

    #[tokio::test]
    async fn connection_failure_yields_transport_error() {
        // Nothing listens on port 1.
        let p = OpenAiProvider::new(
            "http://127.0.0.1:1/v1/chat/completions".into(),
            "test-model".into(),
            500,
            2,
            "sk-test".into(),
        )
        .unwrap();

        let err = p.complete(&one_turn()).await.unwrap_err();
        match err {
            CompletionError::Transport(desc) => assert!(!desc.is_empty()),
            other => panic!("expected transport error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_recovers_as_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = provider(&server.uri()).complete(&one_turn()).await.unwrap_err();
        assert!(matches!(err, CompletionError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_choices_recovers_as_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = provider(&server.uri()).complete(&one_turn()).await.unwrap_err();
        match err {
            CompletionError::Parse(desc) => assert!(desc.contains("choices[0]")),
            other => panic!("expected parse error, got: {other}"),
        }
    }
}
