// Node registry
// Author: kelexine (https://github.com/kelexine)

use super::{ImageQueryNode, Node, NodeDescriptor, NodeInputs, NodeOutputs};
use crate::config::AppConfig;
use crate::error::{NodeError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Nodes available to the host, keyed by descriptor name.
#[derive(Default, Clone)]
pub struct NodeRegistry {
    nodes: BTreeMap<String, Arc<dyn Node>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Names are unique; a second registration is rejected.
    pub fn register(&mut self, node: impl Node + 'static) -> Result<()> {
        let name = node.descriptor().name.clone();
        if self.nodes.contains_key(&name) {
            return Err(NodeError::InvalidInput(format!(
                "Node '{}' is already registered",
                name
            )));
        }

        debug!(
            "Registered node {} ({} / {})",
            name,
            node.descriptor().category,
            node.descriptor().display_name
        );
        self.nodes.insert(name, Arc::new(node));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Node>> {
        self.nodes.get(name).cloned()
    }

    /// Descriptors of every registered node, sorted by name.
    pub fn descriptors(&self) -> Vec<&NodeDescriptor> {
        self.nodes.values().map(|node| node.descriptor()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run the node registered under `name`.
    pub async fn process(&self, name: &str, inputs: &NodeInputs) -> Result<NodeOutputs> {
        let node = self
            .nodes
            .get(name)
            .ok_or_else(|| NodeError::InvalidInput(format!("Unknown node: {}", name)))?;
        node.process(inputs).await
    }
}

impl std::fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRegistry")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Register every node this crate provides. Called by the host bootstrap.
pub fn register_nodes(registry: &mut NodeRegistry, config: &AppConfig) -> Result<()> {
    registry.register(ImageQueryNode::new(config)?)
}
