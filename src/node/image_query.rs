// Image + prompt query node
// Author: kelexine (https://github.com/kelexine)

use super::{Node, NodeDescriptor, NodeInputs, NodeOutputs, SlotSpec};
use crate::config::AppConfig;
use crate::error::{NodeError, Result};
use crate::openai::{ApiKey, ChatCompletionRequest, ChatMessage, OpenAiClient};
use crate::vision::{encode_data_uri, ImageBuffer};
use async_trait::async_trait;
use tracing::{debug, info, Instrument};

/// Registry key of the image query node.
pub const IMAGE_QUERY_NODE: &str = "image_query";

pub const INPUT_IMAGE: &str = "image";
pub const INPUT_PROMPT: &str = "prompt";
pub const INPUT_API_KEY: &str = "api_key";
pub const OUTPUT_ANSWER: &str = "answer";

/// Result of a successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub answer: String,
}

/// Sends one image and one prompt to a multimodal chat model and returns its
/// answer.
///
/// Holds only immutable settings, so one instance may serve concurrent calls.
pub struct ImageQueryNode {
    descriptor: NodeDescriptor,
    client: OpenAiClient,
    model: String,
    system_instruction: String,
}

impl ImageQueryNode {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            descriptor: NodeDescriptor {
                name: IMAGE_QUERY_NODE.to_string(),
                category: config.node.category.clone(),
                display_name: config.node.display_name.clone(),
                inputs: vec![
                    SlotSpec::image(INPUT_IMAGE),
                    SlotSpec::text(INPUT_PROMPT),
                    SlotSpec::text(INPUT_API_KEY),
                ],
                outputs: vec![SlotSpec::text(OUTPUT_ANSWER)],
            },
            client: OpenAiClient::new(&config.openai)?,
            model: config.openai.model.clone(),
            system_instruction: config.openai.system_instruction.clone(),
        })
    }

    /// Build the chat request for an image and prompt.
    ///
    /// Messages are, in order: the system instruction, the prompt, and the
    /// image as a `data:image/png;base64,` string in its own user message.
    pub fn build_request(&self, image: &ImageBuffer, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_instruction.as_str()),
                ChatMessage::user(prompt),
                ChatMessage::user(encode_data_uri(image.as_bytes())),
            ],
        }
    }

    /// Ask the model about `image`.
    ///
    /// An empty key fails with `Configuration` before any request is made.
    pub async fn query(
        &self,
        image: &ImageBuffer,
        prompt: &str,
        api_key: &ApiKey,
    ) -> Result<QueryAnswer> {
        require_key(api_key)?;

        let span = tracing::info_span!(
            "image_query",
            invocation_id = %uuid::Uuid::new_v4().simple(),
            model = %self.model,
        );

        async {
            let request = self.build_request(image, prompt);
            debug!(
                image_bytes = image.len(),
                prompt_chars = prompt.chars().count(),
                "Built chat completion request"
            );

            let answer = self.client.chat_completion(api_key, &request).await?;
            info!(answer_chars = answer.chars().count(), "Received answer");

            Ok::<_, NodeError>(QueryAnswer { answer })
        }
        .instrument(span)
        .await
    }
}

fn require_key(api_key: &ApiKey) -> Result<()> {
    if api_key.is_empty() {
        return Err(NodeError::Configuration(
            "API Key is required to use this node.".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl Node for ImageQueryNode {
    fn descriptor(&self) -> &NodeDescriptor {
        &self.descriptor
    }

    async fn process(&self, inputs: &NodeInputs) -> Result<NodeOutputs> {
        // A missing key is the same precondition failure as an empty one
        let api_key = ApiKey::new(inputs.text(INPUT_API_KEY)?.unwrap_or_default());
        require_key(&api_key)?;

        let image = inputs.image(INPUT_IMAGE)?;
        let prompt = inputs
            .text(INPUT_PROMPT)?
            .ok_or_else(|| NodeError::InvalidInput(format!("Missing input '{}'", INPUT_PROMPT)))?;

        let QueryAnswer { answer } = self.query(image, prompt, &api_key).await?;
        Ok(NodeOutputs::new().with(OUTPUT_ANSWER, answer))
    }
}
