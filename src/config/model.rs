//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the dynaprompt nodes.
///
/// This struct represents the contents of `dynaprompt.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Host paths
    // =========================================================================
    /// Root of the host installation. `<base_path>/wildcards` is preferred
    /// when it exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// The host's custom node directory, used for the extension-local
    /// wildcard fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_nodes_path: Option<PathBuf>,

    /// Directory name of this extension under `custom_nodes_path`.
    #[serde(default = "default_extension_dir")]
    pub extension_dir: String,

    // =========================================================================
    // Node defaults
    // =========================================================================
    /// Default shown for the advanced node's `autorefresh` input.
    #[serde(default)]
    pub default_autorefresh: AutoRefresh,

    /// Default shown for the advanced node's `console_output` input, and the
    /// verbosity used by the basic nodes.
    #[serde(default = "default_true")]
    pub console_output: bool,

    /// Upper bound for `batch_size` on batch nodes.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: None,
            custom_nodes_path: None,
            extension_dir: default_extension_dir(),
            default_autorefresh: AutoRefresh::default(),
            console_output: default_true(),
            max_batch_size: default_max_batch_size(),
        }
    }
}
