//! Tool draft records and parameter typing.
//!
//! One ToolDraft per discovered HTTP operation. The `endpoint_path` and
//! `http_method` pair identifies the operation that produced the draft;
//! `code` is identifier-safe and may be used as a natural key downstream.

use serde::{Deserialize, Serialize};

/// Primitive type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamType {
    String,
    Number,
    Boolean,
}

impl ParamType {
    /// Infer from an OpenAPI `schema.type` value.
    ///
    /// Total: anything unknown or absent maps to String, so inference
    /// never fails.
    pub fn infer(schema_type: Option<&str>) -> Self {
        match schema_type {
            Some("integer") | Some("number") => Self::Number,
            Some("boolean") => Self::Boolean,
            _ => Self::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
        }
    }
}

/// HTTP request method
///
/// Only the four methods the synthesizer recognizes; `patch`, `options`
/// and friends are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The recognized methods, in the order the synthesizer visits them
    pub const RECOGNIZED: [HttpMethod; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    /// Lower-case key used in OpenAPI path items
    pub fn openapi_key(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One typed parameter of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDraft {
    /// Parameter name; always non-empty
    pub name: String,

    /// Inferred primitive type
    pub param_type: ParamType,

    /// Human-readable description
    pub description: String,

    /// Whether the agent must supply a value
    pub required: bool,
}

impl ParameterDraft {
    /// Create a parameter draft
    pub fn new(
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            required,
        }
    }

    /// The synthetic placeholder for an operation's request body.
    ///
    /// Bodies are carried as one opaque serialized string, never decomposed.
    pub fn request_body() -> Self {
        Self::new(
            "body",
            ParamType::String,
            "Request Body (JSON string)",
            true,
        )
    }
}

/// A not-yet-persisted tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDraft {
    /// Display name shown in the registry
    pub name: String,

    /// Identifier-safe code, lower-case `[a-z0-9-]`
    pub code: String,

    /// Human-readable description
    pub description: String,

    /// Path portion of the operation, e.g. `/users/{id}`
    pub endpoint_path: String,

    /// Method portion of the operation
    pub http_method: HttpMethod,

    /// Parameters in discovery order: declared ones first, then the
    /// synthetic body placeholder if the operation has a request body
    pub parameters: Vec<ParameterDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_infer_numbers() {
        assert_eq!(ParamType::infer(Some("integer")), ParamType::Number);
        assert_eq!(ParamType::infer(Some("number")), ParamType::Number);
    }

    #[test]
    fn test_param_type_infer_boolean() {
        assert_eq!(ParamType::infer(Some("boolean")), ParamType::Boolean);
    }

    #[test]
    fn test_param_type_infer_defaults_to_string() {
        assert_eq!(ParamType::infer(Some("string")), ParamType::String);
        assert_eq!(ParamType::infer(Some("array")), ParamType::String);
        assert_eq!(ParamType::infer(Some("object")), ParamType::String);
        assert_eq!(ParamType::infer(Some("")), ParamType::String);
        assert_eq!(ParamType::infer(Some("int64")), ParamType::String);
        assert_eq!(ParamType::infer(None), ParamType::String);
    }

    #[test]
    fn test_param_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ParamType::String).unwrap(),
            "\"STRING\""
        );
        assert_eq!(
            serde_json::to_string(&ParamType::Number).unwrap(),
            "\"NUMBER\""
        );
        assert_eq!(
            serde_json::to_string(&ParamType::Boolean).unwrap(),
            "\"BOOLEAN\""
        );
    }

    #[test]
    fn test_http_method_recognized_order() {
        let keys: Vec<&str> = HttpMethod::RECOGNIZED
            .iter()
            .map(|m| m.openapi_key())
            .collect();
        assert_eq!(keys, vec!["get", "post", "put", "delete"]);
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_serialization() {
        assert_eq!(serde_json::to_string(&HttpMethod::Post).unwrap(), "\"POST\"");
        let method: HttpMethod = serde_json::from_str("\"PUT\"").unwrap();
        assert_eq!(method, HttpMethod::Put);
    }

    #[test]
    fn test_parameter_draft_request_body() {
        let body = ParameterDraft::request_body();
        assert_eq!(body.name, "body");
        assert_eq!(body.param_type, ParamType::String);
        assert_eq!(body.description, "Request Body (JSON string)");
        assert!(body.required);
    }

    #[test]
    fn test_tool_draft_serialization_roundtrip() {
        let draft = ToolDraft {
            name: "Get Users".to_string(),
            code: "getusers".to_string(),
            description: "Lists users".to_string(),
            endpoint_path: "/users".to_string(),
            http_method: HttpMethod::Get,
            parameters: vec![ParameterDraft::new(
                "limit",
                ParamType::Number,
                "Parameter limit",
                false,
            )],
        };

        let json = serde_json::to_string(&draft).unwrap();
        let restored: ToolDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, restored);
    }
}
