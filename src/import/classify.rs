//! Format classification for pasted import documents.
//!
//! A single input serves two incompatible schemas: the registry's own export
//! bundles (always a top-level array) and OpenAPI documents (always objects).
//! The array check runs first so the two can never be confused.

use serde_json::Value;

/// The recognized import document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// A previously exported bundle of providers and their tools
    NativeBundle,
    /// An OpenAPI document carrying a `paths` field
    OpenApiSpec,
    /// Valid JSON, but neither schema
    Unrecognized,
}

/// Classify a parsed document.
///
/// Total over all JSON values. Bundle entries are not validated here;
/// malformed ones surface as failures from the import endpoint, not from
/// classification. A `paths` key that is present but not a map still
/// classifies as OpenAPI so the synthesizer can report the distinct
/// missing-paths error.
pub fn classify(doc: &Value) -> FormatKind {
    if doc.is_array() {
        return FormatKind::NativeBundle;
    }
    match doc.as_object() {
        Some(obj) if obj.contains_key("paths") => FormatKind::OpenApiSpec,
        _ => FormatKind::Unrecognized,
    }
}
