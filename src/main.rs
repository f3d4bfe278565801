// vision-node - Image + prompt query node backed by OpenAI chat completions
// Author: kelexine (https://github.com/kelexine)

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vision_node::cli::Args;
use vision_node::config::AppConfig;
use vision_node::node::{
    register_nodes, NodeInputs, NodeRegistry, IMAGE_QUERY_NODE, INPUT_API_KEY, INPUT_IMAGE,
    INPUT_PROMPT, OUTPUT_ANSWER,
};
use vision_node::utils::logging;
use vision_node::vision::ImageBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting vision-node v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Host bootstrap, explicit registration
    let mut registry = NodeRegistry::new();
    register_nodes(&mut registry, &config)?;

    if args.list_nodes {
        for descriptor in registry.descriptors() {
            println!(
                "{}\t{}\t{}",
                descriptor.name, descriptor.category, descriptor.display_name
            );
        }
        return Ok(());
    }

    // clap enforces both unless --list-nodes
    let image_path = args.image.context("--image is required")?;
    let prompt = args.prompt.context("--prompt is required")?;

    // Phase 4: Wire inputs and run the node
    let image = ImageBuffer::from_file(&image_path)
        .await
        .with_context(|| format!("Failed to read image {}", image_path.display()))?;

    let inputs = NodeInputs::new()
        .with(INPUT_IMAGE, image)
        .with(INPUT_PROMPT, prompt)
        .with(INPUT_API_KEY, args.api_key);

    let outputs = registry.process(IMAGE_QUERY_NODE, &inputs).await?;
    if let Some(answer) = outputs.text(OUTPUT_ANSWER) {
        println!("{}", answer);
    }

    Ok(())
}
