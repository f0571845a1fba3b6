//! Host-facing prompt nodes.
//!
//! This module provides:
//!
//! - **Registry**: [`NodeKind`], the class names and display names the host
//!   registers
//! - **Schema**: input declarations the host renders as widgets
//! - **Inputs**: decoding of the host's JSON input map
//! - **Sampler / Batch**: node instances that own a prompt cursor
//!
//! Every node instance owns its own cursor and engine; instances never share
//! sampling state.

mod batch;
mod inputs;
mod sampler;
mod schema;


pub use batch::{BatchOutput, BatchSamplerNode, LATENT_CHANNELS, LatentShape};
pub use inputs::{BatchInputs, PromptInputs};
pub use sampler::SamplerNode;
pub use schema::{InputSpec, InputType, MAX_RESOLUTION, NodeSchema};

use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::fingerprint::{self, Reevaluation};
use crate::sampling::{PromptEngine, SamplingMode};
use serde::Serialize;
use std::fmt;

/// Menu category every node is filed under.
pub const CATEGORY: &str = "Dynamic Prompts";

/// Node classes this crate registers with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    RandomGenerator,
    RandomGeneratorAdvanced,
    CombinatorialGenerator,
    RandomGeneratorBatch,
    CombinatorialGeneratorBatch,
}

impl NodeKind {
    /// All node classes, in registration order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::RandomGeneratorAdvanced,
        NodeKind::RandomGenerator,
        NodeKind::CombinatorialGenerator,
        NodeKind::RandomGeneratorBatch,
        NodeKind::CombinatorialGeneratorBatch,
    ];

    /// Class name the host uses as the node's identifier.
    pub fn class_name(&self) -> &'static str {
        match self {
            NodeKind::RandomGenerator => "DPRandomGenerator",
            NodeKind::RandomGeneratorAdvanced => "DPRandomGeneratorAdvanced",
            NodeKind::CombinatorialGenerator => "DPCombinatorialGenerator",
            NodeKind::RandomGeneratorBatch => "DPRandomGeneratorBatch",
            NodeKind::CombinatorialGeneratorBatch => "DPCombinatorialGeneratorBatch",
        }
    }

    /// Human readable title shown in the host's node menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            NodeKind::RandomGenerator => "Random Prompts",
            NodeKind::RandomGeneratorAdvanced => "Random Prompts Advanced",
            NodeKind::CombinatorialGenerator => "Combinatorial Prompts",
            NodeKind::RandomGeneratorBatch => "Random Prompts Batch",
            NodeKind::CombinatorialGeneratorBatch => "Combinatorial Prompts Batch",
        }
    }

    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class_name() == name)
    }

    /// Sampling mode used when the inputs do not pick one.
    pub fn default_mode(&self) -> SamplingMode {
        match self {
            NodeKind::RandomGenerator
            | NodeKind::RandomGeneratorAdvanced
            | NodeKind::RandomGeneratorBatch => SamplingMode::Random,
            NodeKind::CombinatorialGenerator | NodeKind::CombinatorialGeneratorBatch => {
                SamplingMode::Combinatorial
            }
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(
            self,
            NodeKind::RandomGeneratorBatch | NodeKind::CombinatorialGeneratorBatch
        )
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self, NodeKind::RandomGeneratorAdvanced)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Look up a node class, failing with a user error for unknown names.
pub fn require_kind(class_name: &str) -> Result<NodeKind> {
    NodeKind::from_class_name(class_name).ok_or_else(|| {
        let known: Vec<&str> = NodeKind::ALL.iter().map(NodeKind::class_name).collect();
        PromptError::UserError(format!(
            "unknown node class '{}' (known: {})",
            class_name,
            known.join(", ")
        ))
    })
}

/// Answer the host's change query for a node of `kind`.
///
/// Batch nodes and the basic nodes always re-run. The advanced node re-runs
/// only on input changes unless its `autorefresh` input is `Yes`.
pub fn is_changed(kind: NodeKind, inputs: &PromptInputs, config: &Config) -> Reevaluation {
    if kind.is_batch() {
        return Reevaluation::AlwaysReevaluate;
    }
    let settings = inputs.settings(kind, config);
    fingerprint::reevaluation(&settings, &inputs.text, inputs.seed)
}

/// Output of one node execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NodeOutput {
    Prompt(String),
    Batch(BatchOutput),
}

/// A node instance of any registered class.
pub enum NodeInstance<E: PromptEngine> {
    Single(SamplerNode<E>),
    Batch(BatchSamplerNode<E>),
}

impl<E: PromptEngine> NodeInstance<E> {
    /// Instantiate a node of `kind` drawing from `engine`.
    pub fn create(kind: NodeKind, engine: E, config: Config) -> Self {
        if kind.is_batch() {
            NodeInstance::Batch(BatchSamplerNode::new(kind, engine, config))
        } else {
            NodeInstance::Single(SamplerNode::new(kind, engine, config))
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeInstance::Single(node) => node.kind(),
            NodeInstance::Batch(node) => node.kind(),
        }
    }

    /// Execute the node with the host's JSON input map.
    pub fn run(&mut self, inputs: &serde_json::Value) -> Result<NodeOutput> {
        match self {
            NodeInstance::Single(node) => {
                let inputs = PromptInputs::from_json(inputs)?;
                node.get_prompt(&inputs).map(NodeOutput::Prompt)
            }
            NodeInstance::Batch(node) => {
                let inputs = BatchInputs::from_json(inputs)?;
                node.get_batch_prompts(&inputs).map(NodeOutput::Batch)
            }
        }
    }
}
