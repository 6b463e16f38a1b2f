//! Import outcome types.

use crate::error::ToolsmithError;

/// Outcome of a single import invocation.
///
/// The pipeline is stateless and idempotent per invocation; this carries no
/// retry state, only what the caller needs to render a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Import completed; `count` records were handed to the registry
    Success { count: u64 },
    /// Import failed as a whole; no partial drafts were submitted
    Failure { reason: String },
}

impl ImportOutcome {
    pub fn success(count: u64) -> Self {
        Self::Success { count }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<ToolsmithError> for ImportOutcome {
    fn from(err: ToolsmithError) -> Self {
        Self::failure(err.to_string())
    }
}
