// CLI module for vision-node
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// vision-node - Ask a multimodal model a question about an image
#[derive(Parser, Debug)]
#[command(name = "vision-node", version, about, long_about = None)]
pub struct Args {
    /// Image file to send
    #[arg(long, required_unless_present = "list_nodes")]
    pub image: Option<PathBuf>,

    /// Question or instruction about the image
    #[arg(long, required_unless_present = "list_nodes")]
    pub prompt: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Extra config file layered over ~/.vision-node/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print registered nodes and exit
    #[arg(long)]
    pub list_nodes: bool,
}
