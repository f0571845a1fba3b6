//! Single-prompt sampler node.

use super::{NodeKind, PromptInputs};
use crate::config::Config;
use crate::cursor::PromptCursor;
use crate::error::Result;
use crate::fingerprint::Verbosity;
use crate::sampling::PromptEngine;

/// A node instance producing one prompt per execution.
pub struct SamplerNode<E: PromptEngine> {
    kind: NodeKind,
    config: Config,
    cursor: PromptCursor<E>,
}

impl<E: PromptEngine> SamplerNode<E> {
    /// Built through `NodeInstance::create`, which routes by kind.
    pub(crate) fn new(kind: NodeKind, engine: E, config: Config) -> Self {
        Self {
            kind,
            config,
            cursor: PromptCursor::new(engine),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn cursor(&self) -> &PromptCursor<E> {
        &self.cursor
    }

    /// Generate the next prompt for `inputs`.
    pub fn get_prompt(&mut self, inputs: &PromptInputs) -> Result<String> {
        let settings = inputs.settings(self.kind, &self.config);
        let prompt = self
            .cursor
            .next_prompt(&inputs.text, inputs.seed, settings.mode)?;

        if settings.verbosity == Verbosity::Console {
            log::info!("New prompt: {}", prompt);
        }
        Ok(prompt)
    }
}
