//! Command implementations for dynaprompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod fingerprint;
mod generate;
mod schema;
mod wildcards;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// Loads the configuration first so every command sees the same settings.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Nodes => schema::cmd_nodes(),
        Command::Schema(args) => schema::cmd_schema(args, &config),
        Command::Generate(args) => generate::cmd_generate(args, config),
        Command::Fingerprint(args) => fingerprint::cmd_fingerprint(args, &config),
        Command::Wildcards => wildcards::cmd_wildcards(&config),
    }
}
