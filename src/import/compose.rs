//! Provider-level metadata extraction.
//!
//! Pulls the display name and base URL out of an OpenAPI document's
//! top-level fields, independent of per-endpoint synthesis.

use chrono::Local;
use serde_json::Value;

use crate::domain::ProviderDraft;
use crate::import::codegen::sanitize_code;

/// Compose a provider draft from an OpenAPI document.
///
/// Runs for every document classified as OpenAPI, even one whose `paths`
/// turns out to hold zero operations. The base URL stays empty when no
/// usable `servers` entry exists, leaving it for manual entry.
pub fn compose_provider(doc: &Value) -> ProviderDraft {
    let base_url = doc["servers"][0]["url"].as_str().unwrap_or("").to_string();

    let name = match doc["info"]["title"].as_str() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("Imported API - {}", Local::now().format("%Y-%m-%d")),
    };

    let code = sanitize_code(&name);

    ProviderDraft::new(name, code).with_base_url(base_url)
}
