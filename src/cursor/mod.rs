//! Prompt cursor: the per-node resampling state machine.
//!
//! A cursor holds at most one open prompt sequence, bound to the template and
//! sampling mode it was created for. Each call to
//! [`PromptCursor::next_prompt`] returns exactly one prompt:
//!
//! - a mode change drops the sequence and resets the engine context
//! - a non-zero seed reseeds the engine before the draw
//! - a blank template returns `""` without touching the sequence
//! - a template change (literal string inequality) opens a new sequence
//! - an exhausted sequence is rebuilt once; if the rebuilt sequence is
//!   empty too, the call yields `""`
//!
//! # Example
//!
//! ```
//! use dynaprompt::cursor::PromptCursor;
//! use dynaprompt::sampling::{PassthroughEngine, SamplingMode};
//!
//! let mut cursor = PromptCursor::new(PassthroughEngine::new());
//! let prompt = cursor.next_prompt("a red ball", 0, SamplingMode::Random)?;
//! assert_eq!(prompt, "a red ball");
//! assert_eq!(cursor.next_prompt("   ", 7, SamplingMode::Random)?, "");
//! # Ok::<(), dynaprompt::error::PromptError>(())
//! ```

use crate::error::Result;
use crate::sampling::{PromptEngine, SamplingMode, SequenceError};


/// Seed value meaning "leave the engine's random source alone".
pub const NO_RESEED: u64 = 0;

/// Outcome of pulling one item from a sequence.
enum Pull {
    Prompt(String),
    Exhausted,
}

/// Stateful cursor over an engine's prompt sequences.
pub struct PromptCursor<E: PromptEngine> {
    engine: E,
    current_mode: Option<SamplingMode>,
    current_template: Option<String>,
    sequence: Option<E::Sequence>,
}

impl<E: PromptEngine> PromptCursor<E> {
    /// Create a cursor in the empty state.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            current_mode: None,
            current_template: None,
            sequence: None,
        }
    }

    /// Produce the next prompt for `template`.
    ///
    /// Never fails on exhaustion; only engine faults other than
    /// end-of-sequence are returned as errors.
    pub fn next_prompt(&mut self, template: &str, seed: u64, mode: SamplingMode) -> Result<String> {
        if self.current_mode != Some(mode) {
            log::debug!("sampling mode changed to {}, resetting cursor", mode);
            self.current_mode = Some(mode);
            self.current_template = None;
            self.sequence = None;
            self.engine.reset_context();
        }

        if seed != NO_RESEED {
            self.engine.seed_random_source(mode, seed);
        }

        if template.trim().is_empty() {
            return Ok(String::new());
        }

        if self.current_template.as_deref() != Some(template) {
            self.sequence = None;
            self.current_template = None;
            let sequence = self.engine.create_sequence(template, mode)?;
            self.sequence = Some(sequence);
            self.current_template = Some(template.to_string());
        }

        let Some(sequence) = self.sequence.as_mut() else {
            log::error!("no open prompt sequence for the current template");
            return Ok(String::new());
        };

        if let Pull::Prompt(prompt) = pull_first(sequence)? {
            return Ok(prompt);
        }

        log::debug!("prompt sequence exhausted, rebuilding");
        let mut fresh = self.engine.create_sequence(template, mode)?;
        let retry = pull_retry(&mut fresh);
        self.sequence = Some(fresh);

        match retry? {
            Pull::Prompt(prompt) => Ok(prompt),
            Pull::Exhausted => {
                log::warn!("No more prompts to generate for template {:?}", template);
                Ok(String::new())
            }
        }
    }

    /// The engine this cursor draws from.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Template the open sequence is bound to, if any.
    pub fn current_template(&self) -> Option<&str> {
        self.current_template.as_deref()
    }

    /// Last mode passed to [`next_prompt`](Self::next_prompt).
    pub fn current_mode(&self) -> Option<SamplingMode> {
        self.current_mode
    }

    pub fn has_open_sequence(&self) -> bool {
        self.sequence.is_some()
    }
}

/// First draw: an unusable sequence counts as exhausted.
fn pull_first<S>(sequence: &mut S) -> Result<Pull>
where
    S: Iterator<Item = std::result::Result<String, SequenceError>>,
{
    match sequence.next() {
        Some(Ok(prompt)) => Ok(Pull::Prompt(prompt)),
        None => Ok(Pull::Exhausted),
        Some(Err(SequenceError::Unusable(reason))) => {
            log::debug!("prompt sequence unusable ({}), treating as exhausted", reason);
            Ok(Pull::Exhausted)
        }
        Some(Err(err)) => Err(err.into()),
    }
}

/// Draw from a freshly rebuilt sequence: only end-of-sequence is absorbed.
fn pull_retry<S>(sequence: &mut S) -> Result<Pull>
where
    S: Iterator<Item = std::result::Result<String, SequenceError>>,
{
    match sequence.next() {
        Some(Ok(prompt)) => Ok(Pull::Prompt(prompt)),
        None => Ok(Pull::Exhausted),
        Some(Err(err)) => Err(err.into()),
    }
}
