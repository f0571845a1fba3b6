//! Engines used by unit tests.
//!
//! `VariantEngine` understands just enough syntax (flat `{a|b|c}` groups) to
//! exercise random and combinatorial sequences. `ScriptedEngine` hands out
//! pre-recorded sequences so tests can inject faults.

use crate::sampling::{PromptEngine, SamplingMode, SequenceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Calls observed by a test engine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct EngineJournal {
    pub created: Vec<(String, SamplingMode)>,
    pub reseeds: Vec<(SamplingMode, u64)>,
    pub resets: usize,
}

/// Split a template into groups of alternatives. Literal text is a
/// one-element group.
fn parse_groups(template: &str) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            literal.push(ch);
            continue;
        }
        if !literal.is_empty() {
            groups.push(vec![std::mem::take(&mut literal)]);
        }
        let body: String = chars.by_ref().take_while(|c| *c != '}').collect();
        let options: Vec<String> = body
            .split('|')
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        groups.push(options);
    }
    if !literal.is_empty() {
        groups.push(vec![literal]);
    }
    groups
}

pub(crate) struct VariantEngine {
    pub journal: EngineJournal,
    random: Rc<RefCell<StdRng>>,
    combinatorial: Rc<RefCell<StdRng>>,
}

impl VariantEngine {
    pub(crate) fn new() -> Self {
        Self {
            journal: EngineJournal::default(),
            random: Rc::new(RefCell::new(StdRng::seed_from_u64(0xD1CE))),
            combinatorial: Rc::new(RefCell::new(StdRng::seed_from_u64(0xD1CE))),
        }
    }

    fn rng(&self, mode: SamplingMode) -> &Rc<RefCell<StdRng>> {
        match mode {
            SamplingMode::Random => &self.random,
            SamplingMode::Combinatorial => &self.combinatorial,
        }
    }
}

pub(crate) enum VariantSequence {
    Random {
        groups: Vec<Vec<String>>,
        rng: Rc<RefCell<StdRng>>,
    },
    Combinatorial {
        groups: Vec<Vec<String>>,
        index: usize,
        total: usize,
    },
}

impl Iterator for VariantSequence {
    type Item = Result<String, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            VariantSequence::Random { groups, rng } => {
                if groups.iter().any(|g| g.is_empty()) {
                    return None;
                }
                let mut rng = rng.borrow_mut();
                let prompt: String = groups
                    .iter()
                    .map(|g| g[rng.gen_range(0..g.len())].as_str())
                    .collect();
                Some(Ok(prompt))
            }
            VariantSequence::Combinatorial {
                groups,
                index,
                total,
            } => {
                if *index >= *total {
                    return None;
                }
                // Last group varies fastest.
                let mut rest = *index;
                let mut parts = vec![""; groups.len()];
                for (slot, group) in groups.iter().enumerate().rev() {
                    parts[slot] = group[rest % group.len()].as_str();
                    rest /= group.len();
                }
                *index += 1;
                Some(Ok(parts.concat()))
            }
        }
    }
}

impl PromptEngine for VariantEngine {
    type Sequence = VariantSequence;

    fn create_sequence(
        &mut self,
        template: &str,
        mode: SamplingMode,
    ) -> Result<Self::Sequence, SequenceError> {
        self.journal.created.push((template.to_string(), mode));
        let groups = parse_groups(template);
        Ok(match mode {
            SamplingMode::Random => VariantSequence::Random {
                groups,
                rng: Rc::clone(self.rng(mode)),
            },
            SamplingMode::Combinatorial => {
                let total = groups.iter().map(Vec::len).product();
                VariantSequence::Combinatorial {
                    groups,
                    index: 0,
                    total,
                }
            }
        })
    }

    fn seed_random_source(&mut self, mode: SamplingMode, seed: u64) {
        self.journal.reseeds.push((mode, seed));
        *self.rng(mode).borrow_mut() = StdRng::seed_from_u64(seed);
    }

    fn reset_context(&mut self) {
        self.journal.resets += 1;
    }
}

/// Engine whose sequences are scripted item by item.
pub(crate) struct ScriptedEngine {
    pub journal: EngineJournal,
    scripts: VecDeque<Result<Vec<Result<String, SequenceError>>, SequenceError>>,
}

impl ScriptedEngine {
    /// Each entry is one `create_sequence` outcome, consumed in order.
    /// Once the scripts run out, sequences are empty.
    pub(crate) fn new(
        scripts: Vec<Result<Vec<Result<String, SequenceError>>, SequenceError>>,
    ) -> Self {
        Self {
            journal: EngineJournal::default(),
            scripts: scripts.into(),
        }
    }
}

impl PromptEngine for ScriptedEngine {
    type Sequence = std::vec::IntoIter<Result<String, SequenceError>>;

    fn create_sequence(
        &mut self,
        template: &str,
        mode: SamplingMode,
    ) -> Result<Self::Sequence, SequenceError> {
        self.journal.created.push((template.to_string(), mode));
        let items = self.scripts.pop_front().unwrap_or_else(|| Ok(Vec::new()))?;
        Ok(items.into_iter())
    }

    fn seed_random_source(&mut self, mode: SamplingMode, seed: u64) {
        self.journal.reseeds.push((mode, seed));
    }

    fn reset_context(&mut self) {
        self.journal.resets += 1;
    }
}

/// Shorthand for a scripted prompt item.
pub(crate) fn ok(prompt: &str) -> Result<String, SequenceError> {
    Ok(prompt.to_string())
}

#[test]
fn parse_groups_splits_alternatives() {
    assert_eq!(
        parse_groups("a {red|blue} ball"),
        vec![
            vec!["a ".to_string()],
            vec!["red".to_string(), "blue".to_string()],
            vec![" ball".to_string()],
        ]
    );
}
