//! Configuration types and defaults for dynaprompt.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use crate::fingerprint::RefreshPolicy;
use serde::{Deserialize, Serialize};

/// Largest batch a batch node accepts.
pub const MAX_BATCH_SIZE: u32 = 4096;

/// Yes/No toggle the host shows for the `autorefresh` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AutoRefresh {
    /// Re-run the node on every queue.
    Yes,
    /// Re-run only when inputs change (default).
    #[default]
    No,
}

impl AutoRefresh {
    /// Parse the host's `"Yes"` / `"No"` choice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AutoRefresh::Yes => "Yes",
            AutoRefresh::No => "No",
        }
    }

    /// Refresh policy this toggle selects.
    pub fn policy(&self) -> RefreshPolicy {
        match self {
            AutoRefresh::Yes => RefreshPolicy::Always,
            AutoRefresh::No => RefreshPolicy::OnChange,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_extension_dir() -> String {
    "comfyui-dynamicprompts".to_string()
}
pub(crate) fn default_max_batch_size() -> u32 {
    MAX_BATCH_SIZE
}
pub(crate) fn default_true() -> bool {
    true
}
