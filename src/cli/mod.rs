//! CLI module for toolsmith - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for importing documents
//! into the registry and previewing drafts without network calls.

pub mod commands;

pub use commands::{Cli, Commands};
