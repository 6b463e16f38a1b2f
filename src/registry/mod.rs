//! Registry backend client.
//!
//! The registry owns persistence; toolsmith only shapes payloads for three
//! endpoints and reports their outcomes. The trait keeps the pipeline
//! testable without a running backend.

pub mod http;
pub mod types;

pub use http::{HttpRegistryClient, RegistryConfig};
pub use types::{
    BatchCreated, BundleImported, CreateProviderRequest, ParameterRecord, ProviderCreated,
    ToolRecord,
};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ProviderDraft;
use crate::error::Result;

/// Stateless registry client - each call is one request/response
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Create a provider, returning its assigned numeric id
    async fn create_provider(&self, draft: &ProviderDraft) -> Result<u64>;

    /// Create a batch of tools in one call, returning the created count
    async fn create_tools_batch(&self, tools: &[ToolRecord]) -> Result<u64>;

    /// Forward a native export bundle verbatim, returning the backend message
    async fn import_bundle(&self, bundle: &Value) -> Result<String>;
}
