//! Implementation of the `dynaprompt fingerprint` command.

use crate::cli::FingerprintArgs;
use crate::config::{AutoRefresh, Config};
use crate::error::{PromptError, Result};
use crate::fingerprint::Reevaluation;
use crate::nodes::{NodeKind, PromptInputs, is_changed};
use crate::sampling::SamplingMode;

/// Execute the `dynaprompt fingerprint` command.
pub fn cmd_fingerprint(args: FingerprintArgs, config: &Config) -> Result<()> {
    match decide(&args, config)? {
        Reevaluation::AlwaysReevaluate => println!("always"),
        Reevaluation::ReevaluateIfDifferent(fingerprint) => println!("{}", fingerprint),
    }
    Ok(())
}

fn decide(args: &FingerprintArgs, config: &Config) -> Result<Reevaluation> {
    let mode = SamplingMode::from_str(&args.mode)
        .ok_or_else(|| PromptError::UserError(format!("unknown mode '{}'", args.mode)))?;
    let autorefresh = match args.autorefresh.as_deref() {
        Some(value) => Some(AutoRefresh::from_str(value).ok_or_else(|| {
            PromptError::UserError(format!("autorefresh must be Yes or No (found '{}')", value))
        })?),
        None => None,
    };

    let inputs = PromptInputs {
        autorefresh,
        console_output: args.console_output,
        ..PromptInputs::new(args.text.clone(), args.seed, mode)
    };
    Ok(is_changed(NodeKind::RandomGeneratorAdvanced, &inputs, config))
}
