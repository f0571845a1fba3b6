//! Implementation of the `dynaprompt wildcards` command.

use crate::config::Config;
use crate::error::Result;
use crate::wildcards::{WildcardCatalog, resolve_wildcards_dir};

/// Execute the `dynaprompt wildcards` command.
///
/// Prints the resolved directory, then one wildcard name per line.
pub fn cmd_wildcards(config: &Config) -> Result<()> {
    let dir = resolve_wildcards_dir(config)?;
    let catalog = WildcardCatalog::open(&dir)?;

    println!("{}", catalog.root().display());
    if catalog.names().is_empty() {
        eprintln!("(no wildcard files)");
    }
    for name in catalog.names() {
        println!("  __{}__", name);
    }
    Ok(())
}
