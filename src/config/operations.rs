//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_BATCH_SIZE;
use crate::error::{PromptError, Result};
use crate::fingerprint::Verbosity;
use std::path::{Component, Path};

/// File name looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "dynaprompt.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `path` if given, else `dynaprompt.yaml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `extension_dir` must be a single, non-empty path component
    /// - `max_batch_size` must be between 1 and 4096
    pub fn validate(&self) -> Result<()> {
        let mut components = Path::new(&self.extension_dir).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal {
            return Err(PromptError::UserError(format!(
                "config validation failed: extension_dir must be a single directory name (found '{}')",
                self.extension_dir
            )));
        }

        if self.max_batch_size == 0 || self.max_batch_size > MAX_BATCH_SIZE {
            return Err(PromptError::UserError(format!(
                "config validation failed: max_batch_size must be between 1 and {} (found {})",
                MAX_BATCH_SIZE, self.max_batch_size
            )));
        }

        Ok(())
    }

    /// Verbosity implied by `console_output`.
    pub fn verbosity(&self) -> Verbosity {
        if self.console_output {
            Verbosity::Console
        } else {
            Verbosity::Quiet
        }
    }
}
