//! Implementation of the `nodes` and `schema` commands.

use crate::cli::SchemaArgs;
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::nodes::{NodeKind, NodeSchema, require_kind};
use serde_json::Value;

/// Execute the `dynaprompt nodes` command.
pub fn cmd_nodes() -> Result<()> {
    for line in node_table() {
        println!("{}", line);
    }
    Ok(())
}

/// One `<class>  <display name>` line per registered node.
fn node_table() -> Vec<String> {
    let width = NodeKind::ALL
        .iter()
        .map(|kind| kind.class_name().len())
        .max()
        .unwrap_or(0);
    NodeKind::ALL
        .iter()
        .map(|kind| format!("{:width$}  {}", kind.class_name(), kind.display_name()))
        .collect()
}

/// Execute the `dynaprompt schema` command.
pub fn cmd_schema(args: SchemaArgs, config: &Config) -> Result<()> {
    let schemas = collect_schemas(args.class.as_deref(), config)?;
    let rendered = serde_json::to_string_pretty(&schemas)
        .map_err(|e| PromptError::UserError(format!("failed to render schema: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

fn collect_schemas(class: Option<&str>, config: &Config) -> Result<Value> {
    match class {
        Some(class) => {
            let kind = require_kind(class)?;
            Ok(NodeSchema::for_kind(kind, config).to_json())
        }
        None => Ok(Value::Array(
            NodeKind::ALL
                .iter()
                .map(|kind| NodeSchema::for_kind(*kind, config).to_json())
                .collect(),
        )),
    }
}
