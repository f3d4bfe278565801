// OpenAI chat completions module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::OpenAiClient;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Bearer credential for the OpenAI API.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

// Custom Debug impl that never logs the key
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

/// Chat completions request body.
///
/// Field order is fixed by the struct, so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// A single chat message with plain string content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completions response. Only the fields the node reads are modeled.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    /// Null for refusals and tool calls.
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if there is one.
    pub fn first_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_impl_masks_key() {
        let key = ApiKey::new("sk-live-secret");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("sk-live-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4-turbo".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"model":"gpt-4-turbo","messages":[{"role":"system","content":"sys"},{"role":"user","content":"hi"}]}"#
        );
    }

    #[test]
    fn test_first_content_ignores_extra_fields() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "a cat"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "a dog"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_content().as_deref(), Some("a cat"));
    }

    #[test]
    fn test_first_content_empty_choices() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.first_content().is_none());
    }

    #[test]
    fn test_missing_choices_fails_to_parse() {
        let result = serde_json::from_str::<ChatCompletionResponse>(r#"{"id": "x"}"#);
        assert!(result.is_err());
    }
}
