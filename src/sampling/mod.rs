//! Seam between the prompt cursor and the external sampling engine.
//!
//! The engine owns the template grammar, wildcard resolution, and the
//! random/combinatorial expansion. This crate only depends on three
//! capabilities, expressed by [`PromptEngine`]:
//!
//! - create a lazy sequence of prompts for a (template, mode) pair
//! - draw from that sequence (the sequence is an [`Iterator`])
//! - reseed the random source used by a mode
//!
//! A sequence yielding `None` is exhausted. A sequence yielding
//! `Some(Err(SequenceError::Unusable(_)))` has lost its internal state and
//! must be rebuilt; any other error is a genuine engine failure.

mod passthrough;

pub use passthrough::PassthroughEngine;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Strategy used to resolve a template into concrete strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Independent random draw per prompt; sequences are unbounded.
    #[default]
    Random,
    /// Exhaustive enumeration of every variant; sequences end.
    Combinatorial,
}

impl SamplingMode {
    /// All modes, in the order the host lists them.
    pub const ALL: [SamplingMode; 2] = [SamplingMode::Random, SamplingMode::Combinatorial];

    /// Parse a sampling mode from its wire form.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "random" => Some(Self::Random),
            "combinatorial" => Some(Self::Combinatorial),
            _ => None,
        }
    }

    /// Wire form used in node schemas and host inputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingMode::Random => "random",
            SamplingMode::Combinatorial => "combinatorial",
        }
    }
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Faults a sampling engine can report while creating or drawing a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The sequence was driven from an incompatible engine state and cannot
    /// continue. The cursor rebuilds the sequence once when it sees this.
    #[error("sequence state is unusable: {0}")]
    Unusable(String),

    /// Any other engine failure (bad template, unreadable wildcard, ...).
    #[error("{0}")]
    Engine(String),
}

/// Capability contract of the external templating and sampling engine.
pub trait PromptEngine {
    /// Lazy sequence of prompts bound to the (template, mode) it was created for.
    type Sequence: Iterator<Item = Result<String, SequenceError>>;

    /// Create a fresh sequence for `template` sampled with `mode`.
    fn create_sequence(
        &mut self,
        template: &str,
        mode: SamplingMode,
    ) -> Result<Self::Sequence, SequenceError>;

    /// Deterministically reseed the random source used by `mode`.
    fn seed_random_source(&mut self, mode: SamplingMode, seed: u64);

    /// Discard any mode-scoped state such as cached wildcard lookups.
    ///
    /// Called by the cursor whenever the sampling mode changes.
    fn reset_context(&mut self) {}
}
