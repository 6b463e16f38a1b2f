//! The import pipeline.
//!
//! raw text → JSON parse → classification → (OpenAPI only) provider
//! composition + endpoint synthesis → batch assembly → registry calls.
//! Classification and synthesis are pure; nothing touches the network until
//! every draft is built, so malformed documents fail before a single
//! request is issued.

pub mod assemble;
pub mod classify;
pub mod codegen;
pub mod compose;
pub mod synthesize;

pub use assemble::{ProviderTarget, submit_bundle, submit_tools};
pub use classify::{FormatKind, classify};
pub use compose::compose_provider;
pub use synthesize::synthesize;

use log::{debug, info};
use serde_json::Value;

use crate::domain::{AuthConfig, ImportOutcome, ProviderDraft, ToolDraft};
use crate::error::{Result, ToolsmithError};
use crate::registry::RegistryClient;

/// Operator-supplied overrides applied on top of the composed provider draft
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    /// Replace the display name (the code is re-derived from it)
    pub name: Option<String>,
    /// Replace the base URL
    pub base_url: Option<String>,
    /// Replace the authentication configuration
    pub auth: Option<AuthConfig>,
}

impl ProviderOverrides {
    fn apply(&self, mut draft: ProviderDraft) -> ProviderDraft {
        if let Some(name) = &self.name {
            draft.code = codegen::sanitize_code(name);
            draft.name = name.clone();
        }
        if let Some(base_url) = &self.base_url {
            draft.base_url = base_url.clone();
        }
        if let Some(auth) = &self.auth {
            draft.auth = auth.clone();
        }
        draft
    }
}

/// A dry pipeline run: classification and synthesis, no network
#[derive(Debug)]
pub struct Preview {
    /// What the document turned out to be
    pub kind: FormatKind,
    /// Composed provider draft (OpenAPI documents only)
    pub provider: Option<ProviderDraft>,
    /// Synthesized tool drafts (OpenAPI documents only)
    pub tools: Vec<ToolDraft>,
    /// Top-level entry count (native bundles only)
    pub bundle_entries: usize,
}

/// Classify and synthesize without touching the registry.
pub fn preview(raw: &str) -> Result<Preview> {
    let doc: Value = serde_json::from_str(raw)?;

    match classify(&doc) {
        FormatKind::NativeBundle => Ok(Preview {
            kind: FormatKind::NativeBundle,
            provider: None,
            tools: Vec::new(),
            bundle_entries: doc.as_array().map(|a| a.len()).unwrap_or(0),
        }),
        FormatKind::OpenApiSpec => {
            let provider = compose_provider(&doc);
            let tools = synthesize(&doc)?;
            Ok(Preview {
                kind: FormatKind::OpenApiSpec,
                provider: Some(provider),
                tools,
                bundle_entries: 0,
            })
        }
        FormatKind::Unrecognized => Err(ToolsmithError::UnrecognizedFormat),
    }
}

/// Run the whole pipeline and submit the result to the registry.
///
/// `existing_provider` attaches synthesized tools to a persisted provider
/// instead of creating one from the document. The outcome carries the
/// user-facing success count or failure reason; it never panics and never
/// leaves partial drafts behind.
pub async fn run_import(
    raw: &str,
    existing_provider: Option<u64>,
    overrides: &ProviderOverrides,
    registry: &dyn RegistryClient,
) -> ImportOutcome {
    match import_inner(raw, existing_provider, overrides, registry).await {
        Ok(count) => ImportOutcome::success(count),
        Err(e) => e.into(),
    }
}

async fn import_inner(
    raw: &str,
    existing_provider: Option<u64>,
    overrides: &ProviderOverrides,
    registry: &dyn RegistryClient,
) -> Result<u64> {
    let doc: Value = serde_json::from_str(raw)?;

    match classify(&doc) {
        FormatKind::NativeBundle => {
            debug!("Document classified as native bundle");
            submit_bundle(&doc, registry).await
        }
        FormatKind::OpenApiSpec => {
            debug!("Document classified as OpenAPI");
            let draft = overrides.apply(compose_provider(&doc));
            let tools = synthesize(&doc)?;
            info!("Synthesized {} tool draft(s)", tools.len());

            let target = match existing_provider {
                Some(id) => ProviderTarget::Existing(id),
                None => ProviderTarget::Draft(draft),
            };
            submit_tools(target, &tools, registry).await
        }
        FormatKind::Unrecognized => Err(ToolsmithError::UnrecognizedFormat),
    }
}
