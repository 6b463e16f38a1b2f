//! HTTP registry client implementation.
//!
//! One reqwest client, three endpoints, no retries: each operation is a
//! single request/response, and failures map to the per-call error kinds.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ProviderDraft;
use crate::error::{Result, ToolsmithError};
use crate::registry::RegistryClient;
use crate::registry::types::{
    BatchCreated, BundleImported, CreateProviderRequest, ProviderCreated, ToolRecord,
};

/// Default request timeout in milliseconds
const REQUEST_TIMEOUT_MS_DEFAULT: u64 = 30_000;

/// Configuration for the HTTP registry client
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the registry admin API
    pub base_url: String,
    /// Timeout per request
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS_DEFAULT),
        }
    }
}

/// Registry client over the backend's admin HTTP API
pub struct HttpRegistryClient {
    client: Client,
    config: RegistryConfig,
}

impl HttpRegistryClient {
    /// Create a new client against the configured backend
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ToolsmithError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body and parse the response, or return the error text the
    /// backend produced. Mapping to a taxonomy variant happens per call.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> std::result::Result<R, String>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP {}: {}", status.as_u16(), error_body));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn create_provider(&self, draft: &ProviderDraft) -> Result<u64> {
        let body = CreateProviderRequest::from_draft(draft);
        let created: ProviderCreated = self
            .post_json("/admin/providers", &body)
            .await
            .map_err(ToolsmithError::ProviderCreation)?;
        Ok(created.id)
    }

    async fn create_tools_batch(&self, tools: &[ToolRecord]) -> Result<u64> {
        let created: BatchCreated = self
            .post_json("/admin/tools/api/batch", tools)
            .await
            .map_err(ToolsmithError::BatchCreation)?;
        Ok(created.created_count)
    }

    async fn import_bundle(&self, bundle: &Value) -> Result<String> {
        let imported: BundleImported = self
            .post_json("/api/import/providers", bundle)
            .await
            .map_err(ToolsmithError::BundleImport)?;
        Ok(imported.message)
    }
}

impl std::fmt::Debug for HttpRegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRegistryClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_config_default() {
        let config = RegistryConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn test_client_creation() {
        let client = HttpRegistryClient::new(RegistryConfig::default()).unwrap();
        assert_eq!(client.url("/admin/providers"), "http://localhost:8080/admin/providers");
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpRegistryClient::new(RegistryConfig {
            base_url: "http://registry.test/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.url("/api/import/providers"), "http://registry.test/api/import/providers");
    }
}
