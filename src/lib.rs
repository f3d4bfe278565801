// vision-node - Image + prompt query node backed by OpenAI chat completions
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod node;
pub mod openai;
pub mod utils;
pub mod vision;

pub use error::{NodeError, Result};
pub use node::{register_nodes, ImageQueryNode, Node, NodeInputs, NodeOutputs, NodeRegistry};
