//! Provider draft records.
//!
//! A provider groups tools that share a base URL and authentication
//! configuration.

use serde::{Deserialize, Serialize};

/// How requests to a provider's endpoints are authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    /// No authentication
    None,
    /// Static API key sent with every request
    ApiKey,
}

impl Default for AuthType {
    fn default() -> Self {
        Self::None
    }
}

impl AuthType {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "api-key" | "api_key" | "apikey" => Some(Self::ApiKey),
            _ => None,
        }
    }
}

/// Where the API key is placed on outgoing requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiKeyLocation {
    /// Sent as an HTTP header
    Header,
    /// Sent as a query parameter
    Query,
}

impl Default for ApiKeyLocation {
    fn default() -> Self {
        Self::Header
    }
}

impl ApiKeyLocation {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "header" => Some(Self::Header),
            "query" => Some(Self::Query),
            _ => None,
        }
    }
}

/// Authentication configuration shared by all of a provider's tools
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication scheme
    pub auth_type: AuthType,

    /// Where the key goes when `auth_type` is `ApiKey`
    pub api_key_location: ApiKeyLocation,

    /// Header or query parameter name for the key
    pub api_key_name: String,

    /// The key itself; empty means "provide at execution time"
    pub api_key_value: String,
}

/// A not-yet-persisted provider
///
/// Created by the provider composer from an OpenAPI document's top-level
/// fields; the registry backend assigns the durable numeric id on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDraft {
    /// Display name shown in the registry
    pub name: String,

    /// Identifier-safe code derived from the name
    pub code: String,

    /// Shared base URL for the provider's tools; empty when not discoverable
    pub base_url: String,

    /// Authentication configuration distributed to the provider's tools
    pub auth: AuthConfig,
}

impl ProviderDraft {
    /// Create a draft with no base URL and no authentication
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            base_url: String::new(),
            auth: AuthConfig::default(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the authentication configuration
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Whether a base URL was discovered or supplied
    pub fn has_base_url(&self) -> bool {
        !self.base_url.is_empty()
    }
}
