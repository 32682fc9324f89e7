//! Dummy LLM provider — echoes the last user message back prefixed with
//! `[echo]`. Used for keyless runs and for testing the full round-trip
//! without a real API.

use crate::conversation::{Message, Role};
use crate::llm::CompletionError;

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        Ok(format!("[echo] {last_user}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_last_user_message() {
        let p = DummyProvider;
        let messages = vec![
            Message { role: Role::System, content: "sys".into() },
            Message { role: Role::User, content: "hello".into() },
        ];
        assert_eq!(p.complete(&messages).await.unwrap(), "[echo] hello");
    }

    #[tokio::test]
    async fn no_user_message_echoes_empty() {
        let p = DummyProvider;
        let messages = vec![Message { role: Role::System, content: "sys".into() }];
        assert_eq!(p.complete(&messages).await.unwrap(), "[echo] ");
    }
}
