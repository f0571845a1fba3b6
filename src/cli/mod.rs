//! CLI argument parsing for dynaprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dynaprompt: prompt-resampling nodes for image-generation node graphs.
///
/// The harness drives the same node code the host plugin uses:
/// - list registered node classes and their input schemas
/// - run a node repeatedly and print the prompts it yields
/// - inspect the change fingerprint of the advanced node
/// - resolve the wildcard directory
#[derive(Parser, Debug)]
#[command(name = "dynaprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: ./dynaprompt.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for dynaprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered node classes and their display names.
    Nodes,

    /// Print node input schemas as JSON.
    ///
    /// Prints every node class unless one is named.
    Schema(SchemaArgs),

    /// Run a node and print the prompts it produces.
    ///
    /// Uses the passthrough engine, which treats the template as a single
    /// literal variant.
    Generate(GenerateArgs),

    /// Print the re-evaluation decision for advanced-node inputs.
    Fingerprint(FingerprintArgs),

    /// Resolve the wildcard directory and list available wildcards.
    Wildcards,
}

/// Arguments for the `schema` command.
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Node class name (e.g., DPRandomGenerator).
    pub class: Option<String>,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Template text.
    pub text: String,

    /// Node class to run.
    #[arg(long, default_value = "DPRandomGenerator")]
    pub node: String,

    /// Seed; 0 leaves the engine's random source untouched.
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Sampling mode (single-prompt nodes only).
    #[arg(short, long, value_parser = ["random", "combinatorial"])]
    pub mode: Option<String>,

    /// Number of times to execute the node.
    #[arg(short, long, default_value_t = 1)]
    pub runs: usize,

    /// Prompts per execution (batch nodes only).
    #[arg(long, default_value_t = 1)]
    pub batch_size: u32,

    /// Image width in pixels (batch nodes only).
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Image height in pixels (batch nodes only).
    #[arg(long, default_value_t = 512)]
    pub height: u32,
}

/// Arguments for the `fingerprint` command.
#[derive(Parser, Debug)]
pub struct FingerprintArgs {
    /// Template text.
    pub text: String,

    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    #[arg(short, long, default_value = "random", value_parser = ["random", "combinatorial"])]
    pub mode: String,

    /// Re-run on every queue (Yes) or only on input changes (No).
    #[arg(long, value_parser = ["Yes", "No"])]
    pub autorefresh: Option<String>,

    /// Whether the node logs each prompt.
    #[arg(long)]
    pub console_output: Option<bool>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_nodes() {
        let cli = Cli::try_parse_from(["dynaprompt", "nodes"]).unwrap();
        assert!(matches!(cli.command, Command::Nodes));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["dynaprompt", "wildcards", "--config", "custom.yaml"]).unwrap();
        assert!(matches!(cli.command, Command::Wildcards));
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::try_parse_from(["dynaprompt", "generate", "a cat"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.text, "a cat");
            assert_eq!(args.node, "DPRandomGenerator");
            assert_eq!(args.seed, 0);
            assert_eq!(args.mode, None);
            assert_eq!(args.runs, 1);
            assert_eq!(args.batch_size, 1);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "dynaprompt",
            "generate",
            "a {red|blue} ball",
            "--node",
            "DPCombinatorialGeneratorBatch",
            "--seed",
            "7",
            "--runs",
            "2",
            "--batch-size",
            "4",
            "--width",
            "768",
        ])
        .unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.node, "DPCombinatorialGeneratorBatch");
            assert_eq!(args.seed, 7);
            assert_eq!(args.runs, 2);
            assert_eq!(args.batch_size, 4);
            assert_eq!(args.width, 768);
            assert_eq!(args.height, 512);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["dynaprompt", "generate", "x", "--mode", "ordered"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_fingerprint() {
        let cli = Cli::try_parse_from([
            "dynaprompt",
            "fingerprint",
            "a cat",
            "--autorefresh",
            "No",
            "--console-output",
            "false",
        ])
        .unwrap();
        if let Command::Fingerprint(args) = cli.command {
            assert_eq!(args.mode, "random");
            assert_eq!(args.autorefresh.as_deref(), Some("No"));
            assert_eq!(args.console_output, Some(false));
        } else {
            panic!("Expected Fingerprint command");
        }
    }

    #[test]
    fn parse_schema_with_class() {
        let cli = Cli::try_parse_from(["dynaprompt", "schema", "DPRandomGenerator"]).unwrap();
        if let Command::Schema(args) = cli.command {
            assert_eq!(args.class.as_deref(), Some("DPRandomGenerator"));
        } else {
            panic!("Expected Schema command");
        }
    }
}
