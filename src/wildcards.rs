//! Wildcard directory resolution and catalog listing.
//!
//! The sampling engine loads wildcard files from a single directory. The
//! directory is chosen the way the host expects:
//!
//! 1. `<base_path>/wildcards` if it already exists
//! 2. otherwise `<custom_nodes_path>/<extension_dir>/wildcards`, created on
//!    demand (`custom_nodes_path` defaults to `<base_path>/custom_nodes`)
//!
//! The catalog only lists which wildcard names exist; file contents belong to
//! the engine.

use crate::config::Config;
use crate::error::{PromptError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// File patterns recognised as wildcard files.
pub const WILDCARD_PATTERNS: &[&str] = &["*.txt", "*.yaml", "*.yml", "*.json"];

/// Resolve (and create if needed) the wildcard directory for `config`.
pub fn resolve_wildcards_dir(config: &Config) -> Result<PathBuf> {
    if let Some(base) = &config.base_path {
        let root_level = base.join("wildcards");
        if root_level.is_dir() {
            return Ok(root_level);
        }
    }

    let custom_nodes = match (&config.custom_nodes_path, &config.base_path) {
        (Some(custom_nodes), _) => custom_nodes.clone(),
        (None, Some(base)) => base.join("custom_nodes"),
        (None, None) => {
            return Err(PromptError::Wildcards(
                "neither base_path nor custom_nodes_path is configured".to_string(),
            ));
        }
    };

    let extension_level = custom_nodes.join(&config.extension_dir).join("wildcards");
    fs::create_dir_all(&extension_level).map_err(|e| {
        PromptError::Wildcards(format!(
            "failed to create '{}': {}",
            extension_level.display(),
            e
        ))
    })?;

    log::debug!("using wildcard directory {}", extension_level.display());
    Ok(extension_level)
}

/// Names of the wildcard files available under a directory.
#[derive(Debug, Clone)]
pub struct WildcardCatalog {
    root: PathBuf,
    names: Vec<String>,
}

impl WildcardCatalog {
    /// Scan `root` recursively for wildcard files.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let patterns = build_globset()?;

        let mut names = Vec::new();
        collect_names(&root, &root, &patterns, &mut names)?;
        names.sort();
        names.dedup();

        Ok(Self { root, names })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Wildcard names: relative path without extension, `/`-separated.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }
}

fn build_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in WILDCARD_PATTERNS {
        let glob = Glob::new(pattern).map_err(|e| {
            PromptError::Wildcards(format!("invalid wildcard pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| PromptError::Wildcards(format!("failed to compile wildcard patterns: {}", e)))
}

fn collect_names(root: &Path, dir: &Path, patterns: &GlobSet, names: &mut Vec<String>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        PromptError::Wildcards(format!("failed to read '{}': {}", dir.display(), e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            PromptError::Wildcards(format!("failed to read directory entry: {}", e))
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_names(root, &path, patterns, names)?;
            continue;
        }

        let Some(file_name) = path.file_name() else {
            continue;
        };
        if !patterns.is_match(file_name) {
            continue;
        }

        if let Ok(relative) = path.with_extension("").strip_prefix(root) {
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            names.push(name);
        }
    }

    Ok(())
}
