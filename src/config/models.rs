//! Configuration data structures for vision-node.
//!
//! This module defines the schema for the application settings: the upstream
//! OpenAI connection, host registration metadata and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Upstream OpenAI API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Metadata the host uses to list the node.
    #[serde(default)]
    pub node: NodeConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the upstream chat completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL of the API; `/chat/completions` is appended.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Multimodal model to target.
    /// Default: `gpt-4-turbo`
    #[serde(default = "default_model")]
    pub model: String,

    /// System message sent ahead of the prompt.
    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,

    /// Request timeout in seconds. Unset leaves the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

/// Registration metadata for host-side discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Default: `Custom Nodes`
    #[serde(default = "default_category")]
    pub category: String,

    /// Default: `Paul OpenIA`
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            system_instruction: default_system_instruction(),
            timeout_seconds: None,
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            display_name: default_display_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults
fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_system_instruction() -> String {
    "You are an assistant that analyzes images and answers questions about them.".to_string()
}

fn default_category() -> String {
    "Custom Nodes".to_string()
}

fn default_display_name() -> String {
    "Paul OpenIA".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
