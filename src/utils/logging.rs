//! Structured logging and secret redaction.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to keep
//! API keys out of logs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{NodeError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line output.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Logs go to stderr so stdout stays reserved for the node's answer.
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| NodeError::Configuration(format!("Failed to initialize logging: {}", e)))
}

/// Sanitizes API keys from log messages.
///
/// Every OpenAI secret key (`sk-...`) and every `Bearer` token value is
/// replaced with a placeholder. `sk-` only counts at the start of a word, so
/// text like `risk-level` is left alone.
pub fn sanitize(input: &str) -> String {
    let mut result = redact_after(input, "sk-", "[REDACTED_API_KEY]", true);
    result = redact_after(&result, "Bearer ", "Bearer [REDACTED_TOKEN]", false);
    result
}

/// Replace every occurrence of `marker` plus the token that follows it.
///
/// With `word_start`, occurrences preceded by an alphanumeric or `_` are kept.
fn redact_after(input: &str, marker: &str, placeholder: &str, word_start: bool) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        let (before, from_marker) = rest.split_at(pos);
        output.push_str(before);

        // Preceding char comes from `output` so it also sees earlier chunks
        let mid_word = word_start
            && output
                .chars()
                .next_back()
                .map_or(false, |c| c.is_alphanumeric() || c == '_');
        if mid_word {
            output.push_str(marker);
            rest = &from_marker[marker.len()..];
            continue;
        }

        let after = &from_marker[marker.len()..];
        // Token ends at whitespace, a quote, or end of string
        let end = after
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .unwrap_or(after.len());
        output.push_str(placeholder);
        rest = &after[end..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = r#"{"error": {"message": "Incorrect API key provided: sk-proj-abc123"}}"#;
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("sk-proj-abc123"));
        assert!(output.ends_with(r#""}}"#));
    }

    #[test]
    fn test_sanitize_bearer_token() {
        let input = "Authorization: Bearer abc.def.ghi next";
        let output = sanitize(input);
        assert_eq!(output, "Authorization: Bearer [REDACTED_TOKEN] next");
    }

    #[test]
    fn test_sanitize_multiple_keys() {
        let output = sanitize("sk-one and sk-two");
        assert_eq!(output, "[REDACTED_API_KEY] and [REDACTED_API_KEY]");
    }

    #[test]
    fn test_sanitize_ignores_sk_inside_words() {
        let input = "Invalid request: high risk-level content, see task-id 5";
        assert_eq!(sanitize(input), input);
        assert_eq!(sanitize("risk-level"), "risk-level");
        assert_eq!(sanitize("mask_sk-1"), "mask_sk-1");
    }

    #[test]
    fn test_sanitize_key_after_punctuation() {
        assert_eq!(sanitize("key=sk-abc end"), "key=[REDACTED_API_KEY] end");
        assert_eq!(sanitize("(sk-abc)"), "([REDACTED_API_KEY]");
    }

    #[test]
    fn test_sanitize_leaves_plain_text() {
        assert_eq!(sanitize("unauthorized"), "unauthorized");
    }
}
