//! Error types for toolsmith
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in toolsmith
#[derive(Debug, Error)]
pub enum ToolsmithError {
    /// Input is not valid JSON
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but neither an OpenAPI document nor an export bundle
    #[error("Unrecognized document: expected an OpenAPI object or an export bundle array")]
    UnrecognizedFormat,

    /// OpenAPI-shaped document without a usable paths map
    #[error("No usable \"paths\" object found in the document")]
    MissingPaths,

    /// Provider creation call failed; no tools were created
    #[error("Provider creation failed: {0}")]
    ProviderCreation(String),

    /// Tool batch creation failed after the provider already existed
    #[error("Tool batch creation failed: {0}")]
    BatchCreation(String),

    /// Bundle pass-through import failed
    #[error("Bundle import failed: {0}")]
    BundleImport(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for toolsmith operations
pub type Result<T> = std::result::Result<T, ToolsmithError>;
