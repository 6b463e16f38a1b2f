//! Batch assembly and submission.
//!
//! Pairs every tool draft with a provider id, creating the provider first
//! when given a draft, then hands the registry one batch-create call. The
//! two calls are strictly sequential: the batch payload needs the id the
//! first call returns. No rollback exists; a provider created before a
//! failing batch call stays behind, and the error says so.

use log::info;
use serde_json::Value;

use crate::domain::{ProviderDraft, ToolDraft};
use crate::error::{Result, ToolsmithError};
use crate::registry::{RegistryClient, ToolRecord};

/// Where synthesized tools should be attached
#[derive(Debug, Clone)]
pub enum ProviderTarget {
    /// Attach to an already-persisted provider
    Existing(u64),
    /// Create this provider first, then attach
    Draft(ProviderDraft),
}

/// Submit tool drafts under the target provider, returning the created count.
///
/// Provider creation failure aborts before any tool call, so tools are never
/// created orphaned from a provider. An empty draft list still creates the
/// provider but skips the batch call.
pub async fn submit_tools(
    target: ProviderTarget,
    drafts: &[ToolDraft],
    registry: &dyn RegistryClient,
) -> Result<u64> {
    let (provider_id, created_here) = match target {
        ProviderTarget::Existing(id) => (id, false),
        ProviderTarget::Draft(draft) => {
            let id = registry.create_provider(&draft).await?;
            info!("Created provider '{}' with id {}", draft.name, id);
            (id, true)
        }
    };

    if drafts.is_empty() {
        info!("No tools to create for provider {}", provider_id);
        return Ok(0);
    }

    let records: Vec<ToolRecord> = drafts
        .iter()
        .map(|draft| ToolRecord::from_draft(draft, provider_id))
        .collect();

    match registry.create_tools_batch(&records).await {
        Ok(count) => {
            info!("Created {} tool(s) under provider {}", count, provider_id);
            Ok(count)
        }
        Err(ToolsmithError::BatchCreation(reason)) if created_here => {
            // Surface the orphan so the operator can re-run against it
            Err(ToolsmithError::BatchCreation(format!(
                "{reason} (provider {provider_id} was created; re-run with --provider-id {provider_id})"
            )))
        }
        Err(e) => Err(e),
    }
}

/// Forward a native bundle verbatim to the bundle-import endpoint.
///
/// Returns the number of top-level bundle entries; the backend's own message
/// is logged. No drafts are constructed on this path.
pub async fn submit_bundle(bundle: &Value, registry: &dyn RegistryClient) -> Result<u64> {
    let entries = bundle.as_array().map(|a| a.len() as u64).unwrap_or(0);
    let message = registry.import_bundle(bundle).await?;
    info!("Bundle import accepted ({} entries): {}", entries, message);
    Ok(entries)
}
