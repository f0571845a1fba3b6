//! Implementation of the `dynaprompt generate` command.
//!
//! Builds the same JSON input map the host would send and runs a node
//! instance against it `runs` times.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::nodes::{NodeInstance, NodeOutput, require_kind};
use crate::sampling::PassthroughEngine;
use serde_json::{Value, json};

/// Execute the `dynaprompt generate` command.
pub fn cmd_generate(args: GenerateArgs, config: Config) -> Result<()> {
    for line in generate(&args, config)? {
        println!("{}", line);
    }
    Ok(())
}

fn host_inputs(args: &GenerateArgs) -> Value {
    let mut inputs = json!({
        "text": args.text,
        "seed": args.seed,
        "batch_size": args.batch_size,
        "width": args.width,
        "height": args.height,
    });
    if let Some(mode) = &args.mode {
        inputs["mode"] = json!(mode);
    }
    inputs
}

/// Prompts produced by all runs, one per line.
fn generate(args: &GenerateArgs, config: Config) -> Result<Vec<String>> {
    let kind = require_kind(&args.node)?;
    let mut node = NodeInstance::create(kind, PassthroughEngine::new(), config);
    let inputs = host_inputs(args);

    let mut lines = Vec::new();
    for _ in 0..args.runs {
        match node.run(&inputs)? {
            NodeOutput::Prompt(prompt) => lines.push(prompt),
            NodeOutput::Batch(batch) => lines.extend(batch.prompts),
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;

    fn args(text: &str, node: &str) -> GenerateArgs {
        GenerateArgs {
            text: text.to_string(),
            node: node.to_string(),
            seed: 0,
            mode: None,
            runs: 1,
            batch_size: 1,
            width: 512,
            height: 512,
        }
    }

    #[test]
    fn random_node_repeats_literal_template() {
        let mut args = args("a cat", "DPRandomGenerator");
        args.runs = 3;
        let lines = generate(&args, Config::default()).unwrap();
        assert_eq!(lines, vec!["a cat"; 3]);
    }

    #[test]
    fn combinatorial_mode_cycles_single_variant() {
        let mut args = args("a cat", "DPRandomGenerator");
        args.mode = Some("combinatorial".to_string());
        args.runs = 2;
        let lines = generate(&args, Config::default()).unwrap();
        assert_eq!(lines, vec!["a cat", "a cat"]);
    }

    #[test]
    fn batch_node_prints_every_entry() {
        let mut args = args("a dog", "DPCombinatorialGeneratorBatch");
        args.batch_size = 3;
        args.runs = 2;
        let lines = generate(&args, Config::default()).unwrap();
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn batch_limits_are_enforced() {
        let mut args = args("a dog", "DPRandomGeneratorBatch");
        args.width = 10;
        let err = generate(&args, Config::default()).unwrap_err();
        assert!(matches!(err, PromptError::InvalidInput(_)));
    }

    #[test]
    fn blank_template_prints_empty_line() {
        let lines = generate(&args("  ", "DPRandomGenerator"), Config::default()).unwrap();
        assert_eq!(lines, vec![""]);
    }
}
