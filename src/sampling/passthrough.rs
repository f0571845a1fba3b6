//! Grammar-free engine used by the CLI harness.
//!
//! Treats every template as a single literal variant: random sampling repeats
//! it forever, combinatorial sampling yields it exactly once. This is what any
//! engine produces for a template containing no wildcard syntax, which makes it
//! useful for exercising the cursor and node plumbing without a real engine.

use super::{PromptEngine, SamplingMode, SequenceError};

/// Engine that yields the template text unchanged.
#[derive(Debug, Default)]
pub struct PassthroughEngine {
    sequences_created: usize,
}

impl PassthroughEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sequences this engine has handed out.
    pub fn sequences_created(&self) -> usize {
        self.sequences_created
    }
}

/// Sequence produced by [`PassthroughEngine`].
#[derive(Debug)]
pub struct PassthroughSequence {
    template: String,
    /// `None` for unbounded sequences.
    remaining: Option<usize>,
}

impl Iterator for PassthroughSequence {
    type Item = Result<String, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining.as_mut() {
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(Ok(self.template.clone()))
            }
            None => Some(Ok(self.template.clone())),
        }
    }
}

impl PromptEngine for PassthroughEngine {
    type Sequence = PassthroughSequence;

    fn create_sequence(
        &mut self,
        template: &str,
        mode: SamplingMode,
    ) -> Result<Self::Sequence, SequenceError> {
        self.sequences_created += 1;
        let remaining = match mode {
            SamplingMode::Random => None,
            SamplingMode::Combinatorial => Some(1),
        };
        Ok(PassthroughSequence {
            template: template.to_string(),
            remaining,
        })
    }

    fn seed_random_source(&mut self, mode: SamplingMode, seed: u64) {
        log::debug!("passthrough engine ignores reseed of {} source to {}", mode, seed);
    }
}
