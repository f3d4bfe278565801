// Error types for vision-node
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    /// Missing credentials or unusable settings. Raised before any I/O.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote service answered with a status other than 200.
    #[error("OpenAI API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// 200 response whose JSON lacks `choices[0].message.content`.
    #[error("Response parsing error: {0}")]
    ResponseParse(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),
}

impl NodeError {
    /// Stable identifier for the error class, used in logs and host adapters.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeError::Configuration(_) | NodeError::ConfigParsing(_) => "configuration_error",
            NodeError::Api { .. } => "api_error",
            NodeError::ResponseParse(_) => "response_parse_error",
            NodeError::Transport(_) => "transport_error",
            NodeError::InvalidInput(_) => "invalid_input_error",
            NodeError::Io(_) => "io_error",
        }
    }

    /// HTTP status carried by an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            NodeError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NodeError>;
