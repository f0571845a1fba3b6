//! Dynaprompt: prompt-resampling nodes for image-generation node graphs.
//!
//! Each node turns a wildcard template plus a seed into a concrete prompt.
//! The template grammar lives in an external sampling engine reached through
//! [`sampling::PromptEngine`]; this crate decides when to reuse, advance, or
//! rebuild the engine's prompt sequences ([`cursor`]), when the host may skip
//! re-running a node ([`fingerprint`]), and how nodes present themselves to
//! the host ([`nodes`]).

pub mod cli;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;
pub mod exit_codes;
pub mod fingerprint;
pub mod nodes;
pub mod sampling;
pub mod wildcards;

#[cfg(test)]
mod test_support;
