//! Toolsmith - an importer for agent tool registries
//!
//! Takes a JSON document pasted or piped by an operator (an OpenAPI spec or
//! a previously exported registry bundle), synthesizes provider and tool
//! drafts, and submits them to the registry backend.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod registry;

pub use error::{Result, ToolsmithError};
