//! Batch sampler node.
//!
//! Draws `batch_size` prompts per execution, one cursor call per entry with
//! seeds `seed, seed + 1, ...`, and describes the empty latent batch the host
//! should allocate for them. Encoding the prompts into conditioning is done
//! by the host.

use super::{BatchInputs, NodeKind};
use crate::config::Config;
use crate::cursor::PromptCursor;
use crate::error::Result;
use crate::fingerprint::Verbosity;
use crate::sampling::PromptEngine;
use serde::Serialize;

/// Channels of the latent space images are generated in.
pub const LATENT_CHANNELS: usize = 4;

/// Pixels per latent cell along each axis.
const LATENT_SCALE: u32 = 8;

/// Shape of the zero-filled latent batch: `[batch, channels, height, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatentShape {
    pub batch: usize,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl LatentShape {
    /// Latent shape for `batch` images of `width` x `height` pixels.
    pub fn for_images(batch: usize, width: u32, height: u32) -> Self {
        Self {
            batch,
            channels: LATENT_CHANNELS,
            height: (height / LATENT_SCALE) as usize,
            width: (width / LATENT_SCALE) as usize,
        }
    }

    pub fn dims(&self) -> [usize; 4] {
        [self.batch, self.channels, self.height, self.width]
    }
}

/// Prompts and latent description produced by one batch execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutput {
    pub prompts: Vec<String>,
    pub latent: LatentShape,
}

/// A node instance producing a batch of prompts per execution.
pub struct BatchSamplerNode<E: PromptEngine> {
    kind: NodeKind,
    config: Config,
    cursor: PromptCursor<E>,
}

impl<E: PromptEngine> BatchSamplerNode<E> {
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

    /// Generate `batch_size` prompts.
    ///
    /// Seeds wrap on overflow; a wrapped seed of `0` leaves the engine unseeded
    /// for that entry.
    pub fn get_batch_prompts(&mut self, inputs: &BatchInputs) -> Result<BatchOutput> {
        inputs.validate(&self.config)?;

        let mode = self.kind.default_mode();
        let mut prompts = Vec::with_capacity(inputs.batch_size as usize);
        for offset in 0..u64::from(inputs.batch_size) {
            let seed = inputs.seed.wrapping_add(offset);
            prompts.push(self.cursor.next_prompt(&inputs.text, seed, mode)?);
        }

        if self.config.verbosity() == Verbosity::Console {
            for prompt in &prompts {
                log::info!("New prompt: {}", prompt);
            }
        }

        let latent = LatentShape::for_images(prompts.len(), inputs.width, inputs.height);
        Ok(BatchOutput { prompts, latent })
    }
}
