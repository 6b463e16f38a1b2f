//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - import: run the pipeline and submit to the registry
//! - preview: classify and synthesize without touching the registry

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolsmith - import API descriptions into an agent tool registry
#[derive(Parser, Debug)]
#[command(name = "toolsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a JSON document and submit the result to the registry
    Import {
        /// Path to the document, or `-` for stdin
        file: PathBuf,

        /// Attach tools to an existing provider instead of creating one
        #[arg(short, long)]
        provider_id: Option<u64>,

        /// Override the provider display name
        #[arg(short, long)]
        name: Option<String>,

        /// Override the provider base URL
        #[arg(short, long)]
        base_url: Option<String>,

        /// Authentication type for the new provider (none, api-key)
        #[arg(long)]
        auth_type: Option<String>,

        /// Where the API key is sent (header, query)
        #[arg(long)]
        api_key_location: Option<String>,

        /// Header or query parameter name for the API key
        #[arg(long)]
        api_key_name: Option<String>,

        /// API key value
        #[arg(long)]
        api_key_value: Option<String>,
    },

    /// Classify and synthesize a document without touching the registry
    Preview {
        /// Path to the document, or `-` for stdin
        file: PathBuf,
    },
}
