//! Host-independent node contract.
//!
//! A host adapter turns its own wiring into a [`NodeInputs`] bundle, calls
//! [`Node::process`] and reads the named slots back out of [`NodeOutputs`].
//! Nodes are registered explicitly through [`register_nodes`]; nothing is
//! registered as a side effect of loading the crate.
//!
//! # Submodules
//!
//! - `image_query`: the image + prompt query node.
//! - `registry`: descriptor lookup and dispatch by node name.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod image_query;
mod registry;

pub use image_query::{
    ImageQueryNode, QueryAnswer, IMAGE_QUERY_NODE, INPUT_API_KEY, INPUT_IMAGE, INPUT_PROMPT,
    OUTPUT_ANSWER,
};
pub use registry::{register_nodes, NodeRegistry};

use crate::error::{NodeError, Result};
use crate::vision::ImageBuffer;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// A processing step the host can invoke.
#[async_trait]
pub trait Node: Send + Sync {
    /// Registration metadata for host-side discovery.
    fn descriptor(&self) -> &NodeDescriptor;

    /// Run the node once. Each call is independent of every other call.
    async fn process(&self, inputs: &NodeInputs) -> Result<NodeOutputs>;
}

/// Kind of value a slot carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Image,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpec {
    pub name: &'static str,
    pub kind: SlotKind,
}

impl SlotSpec {
    pub const fn image(name: &'static str) -> Self {
        Self {
            name,
            kind: SlotKind::Image,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: SlotKind::Text,
        }
    }
}

/// What the host needs to list and wire a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    /// Unique registry key.
    pub name: String,
    pub category: String,
    pub display_name: String,
    pub inputs: Vec<SlotSpec>,
    pub outputs: Vec<SlotSpec>,
}

/// A value travelling through a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    Image(ImageBuffer),
    Text(String),
}

impl NodeValue {
    pub fn kind(&self) -> SlotKind {
        match self {
            NodeValue::Image(_) => SlotKind::Image,
            NodeValue::Text(_) => SlotKind::Text,
        }
    }
}

impl From<ImageBuffer> for NodeValue {
    fn from(image: ImageBuffer) -> Self {
        NodeValue::Image(image)
    }
}

impl From<String> for NodeValue {
    fn from(text: String) -> Self {
        NodeValue::Text(text)
    }
}

impl From<&str> for NodeValue {
    fn from(text: &str) -> Self {
        NodeValue::Text(text.to_string())
    }
}

/// Named input slots for one invocation.
#[derive(Debug, Clone, Default)]
pub struct NodeInputs {
    slots: BTreeMap<String, NodeValue>,
}

impl NodeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<NodeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<NodeValue>) {
        self.slots.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&NodeValue> {
        self.slots.get(name)
    }

    /// Image slot, or `InvalidInput` when absent or of another kind.
    pub fn image(&self, name: &str) -> Result<&ImageBuffer> {
        match self.get(name) {
            Some(NodeValue::Image(image)) => Ok(image),
            Some(other) => Err(wrong_kind(name, SlotKind::Image, other.kind())),
            None => Err(NodeError::InvalidInput(format!("Missing input '{}'", name))),
        }
    }

    /// Text slot; `Ok(None)` when absent so callers can pick their own error.
    pub fn text(&self, name: &str) -> Result<Option<&str>> {
        match self.get(name) {
            Some(NodeValue::Text(text)) => Ok(Some(text.as_str())),
            Some(other) => Err(wrong_kind(name, SlotKind::Text, other.kind())),
            None => Ok(None),
        }
    }
}

fn wrong_kind(name: &str, expected: SlotKind, actual: SlotKind) -> NodeError {
    NodeError::InvalidInput(format!(
        "Input '{}' must be {:?}, got {:?}",
        name, expected, actual
    ))
}

/// Named output slots produced by one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeOutputs {
    slots: BTreeMap<String, NodeValue>,
}

impl NodeOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<NodeValue>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&NodeValue> {
        self.slots.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(NodeValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_typed_access() {
        let inputs = NodeInputs::new()
            .with("image", ImageBuffer::from(vec![1, 2, 3]))
            .with("prompt", "what is this?");

        assert_eq!(inputs.image("image").unwrap().len(), 3);
        assert_eq!(inputs.text("prompt").unwrap(), Some("what is this?"));
        assert_eq!(inputs.text("api_key").unwrap(), None);
    }

    #[test]
    fn test_inputs_wrong_kind() {
        let inputs = NodeInputs::new().with("image", "not an image");
        let err = inputs.image("image").unwrap_err();
        assert!(matches!(err, NodeError::InvalidInput(_)));
        assert!(err.to_string().contains("'image'"));
    }

    #[test]
    fn test_inputs_missing_image() {
        let err = NodeInputs::new().image("image").unwrap_err();
        assert!(err.to_string().contains("Missing input 'image'"));
    }

    #[test]
    fn test_outputs_text() {
        let outputs = NodeOutputs::new().with("answer", "a cat");
        assert_eq!(outputs.text("answer"), Some("a cat"));
        assert_eq!(outputs.text("respuesta"), None);
    }
}
