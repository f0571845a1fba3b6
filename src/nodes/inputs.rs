//! Decoding of the host's per-execution input map.

use super::NodeKind;
use super::schema::MAX_RESOLUTION;
use crate::config::{AutoRefresh, Config};
use crate::error::{PromptError, Result};
use crate::fingerprint::{RefreshPolicy, SamplerSettings, Verbosity};
use crate::sampling::SamplingMode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

fn decode<T: DeserializeOwned>(value: &serde_json::Value) -> Result<T> {
    T::deserialize(value).map_err(|e| PromptError::InvalidInput(e.to_string()))
}

/// Inputs of the single-prompt nodes.
///
/// Unknown keys are ignored. `autorefresh` and `console_output` are only
/// meaningful for the advanced node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptInputs {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub mode: Option<SamplingMode>,
    #[serde(default)]
    pub autorefresh: Option<AutoRefresh>,
    #[serde(default)]
    pub console_output: Option<bool>,
}

impl PromptInputs {
    pub fn new(text: impl Into<String>, seed: u64, mode: SamplingMode) -> Self {
        Self {
            text: text.into(),
            seed,
            mode: Some(mode),
            autorefresh: None,
            console_output: None,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        decode(value)
    }

    /// Sampling settings a node of `kind` runs with for these inputs.
    pub fn settings(&self, kind: NodeKind, config: &Config) -> SamplerSettings {
        let mode = self.mode.unwrap_or_else(|| kind.default_mode());
        if !kind.is_advanced() {
            return SamplerSettings {
                mode,
                refresh: RefreshPolicy::Always,
                verbosity: config.verbosity(),
            };
        }

        let console_output = self.console_output.unwrap_or(config.console_output);
        SamplerSettings {
            mode,
            refresh: self
                .autorefresh
                .unwrap_or(config.default_autorefresh)
                .policy(),
            verbosity: if console_output {
                Verbosity::Console
            } else {
                Verbosity::Quiet
            },
        }
    }
}

fn default_dimension() -> u32 {
    512
}

fn default_batch_size() -> u32 {
    1
}

/// Inputs of the batch nodes. The host's `clip` handle and the `autorefresh`
/// choice are not decoded; batch nodes always re-evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchInputs {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_dimension")]
    pub width: u32,
    #[serde(default = "default_dimension")]
    pub height: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

impl BatchInputs {
    pub fn new(text: impl Into<String>, seed: u64, batch_size: u32) -> Self {
        Self {
            text: text.into(),
            seed,
            width: default_dimension(),
            height: default_dimension(),
            batch_size,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        decode(value)
    }

    /// Check dimensions and batch size against the declared limits.
    pub fn validate(&self, config: &Config) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(16..=MAX_RESOLUTION).contains(&value) || value % 8 != 0 {
                return Err(PromptError::InvalidInput(format!(
                    "{} must be a multiple of 8 between 16 and {} (found {})",
                    name, MAX_RESOLUTION, value
                )));
            }
        }

        if self.batch_size == 0 || self.batch_size > config.max_batch_size {
            return Err(PromptError::InvalidInput(format!(
                "batch_size must be between 1 and {} (found {})",
                config.max_batch_size, self.batch_size
            )));
        }

        Ok(())
    }
}
