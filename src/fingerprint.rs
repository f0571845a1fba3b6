//! Change suppression for sampler nodes.
//!
//! The host asks every node whether it needs to run again. A node either
//! demands re-evaluation unconditionally, or hands back a digest of its visible
//! inputs so the host can skip the run when nothing changed. Which of the two
//! applies is decided by the node's [`RefreshPolicy`].

use crate::sampling::SamplingMode;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// When the host should re-run a sampler node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Re-run on every queue, producing a new prompt each time.
    #[default]
    Always,
    /// Re-run only when the visible inputs change.
    OnChange,
}

/// How much a node reports about its own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Quiet,
    /// Log every generated prompt at info level.
    #[default]
    Console,
}

/// Per-node sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SamplerSettings {
    pub mode: SamplingMode,
    pub refresh: RefreshPolicy,
    pub verbosity: Verbosity,
}

/// SHA-256 digest of a node's visible inputs, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Digest `(text, seed, mode, autorefresh, console_output)` in that order.
    ///
    /// Every field is written as `<len>:<text>` so adjacent fields cannot
    /// borrow characters from each other.
    pub fn compute(text: &str, seed: u64, settings: &SamplerSettings) -> Self {
        let autorefresh = match settings.refresh {
            RefreshPolicy::Always => "Yes",
            RefreshPolicy::OnChange => "No",
        };
        let console_output = match settings.verbosity {
            Verbosity::Console => "true",
            Verbosity::Quiet => "false",
        };
        let seed = seed.to_string();

        let mut hasher = Sha256::new();
        for field in [
            text,
            seed.as_str(),
            settings.mode.as_str(),
            autorefresh,
            console_output,
        ] {
            hasher.update(field.len().to_string().as_bytes());
            hasher.update(b":");
            hasher.update(field.as_bytes());
        }
        Fingerprint(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answer to the host's "has this node changed?" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "fingerprint", rename_all = "snake_case")]
pub enum Reevaluation {
    /// Never equal to anything, including itself: the node always runs.
    AlwaysReevaluate,
    /// Run only if the digest differs from the previous answer.
    ReevaluateIfDifferent(Fingerprint),
}

impl Reevaluation {
    /// Whether the host must run the node, given the previous answer.
    pub fn requires_run(&self, previous: Option<&Reevaluation>) -> bool {
        match (self, previous) {
            (
                Reevaluation::ReevaluateIfDifferent(current),
                Some(Reevaluation::ReevaluateIfDifferent(prev)),
            ) => current != prev,
            _ => true,
        }
    }
}

/// Decide how the host should treat a node with these settings and inputs.
pub fn reevaluation(settings: &SamplerSettings, text: &str, seed: u64) -> Reevaluation {
    match settings.refresh {
        RefreshPolicy::Always => Reevaluation::AlwaysReevaluate,
        RefreshPolicy::OnChange => {
            Reevaluation::ReevaluateIfDifferent(Fingerprint::compute(text, seed, settings))
        }
    }
}
