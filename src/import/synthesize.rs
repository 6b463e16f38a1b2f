//! Endpoint synthesis: OpenAPI paths to tool drafts.
//!
//! Walks `paths` in document order, visiting the four recognized methods per
//! path item, and emits one draft per operation found. All-or-nothing: a
//! document without a usable `paths` map produces an error and zero drafts.

use log::warn;
use serde_json::Value;

use crate::domain::{HttpMethod, ParamType, ParameterDraft, ToolDraft};
use crate::error::{Result, ToolsmithError};
use crate::import::codegen::generate_code;

/// Synthesize tool drafts from an OpenAPI document.
///
/// Output order is path-major in document order, then `get, post, put,
/// delete` within each path. Methods outside that set are ignored.
pub fn synthesize(doc: &Value) -> Result<Vec<ToolDraft>> {
    let paths = doc
        .get("paths")
        .and_then(Value::as_object)
        .ok_or(ToolsmithError::MissingPaths)?;

    let mut drafts = Vec::new();
    for (path, item) in paths {
        let Some(item) = item.as_object() else {
            warn!("Skipping path {}: path item is not an object", path);
            continue;
        };

        for method in HttpMethod::RECOGNIZED {
            let Some(operation) = item.get(method.openapi_key()) else {
                continue;
            };
            if !operation.is_object() {
                continue;
            }
            drafts.push(synthesize_operation(path, method, operation));
        }
    }

    Ok(drafts)
}

/// Build one draft from an operation object.
fn synthesize_operation(path: &str, method: HttpMethod, operation: &Value) -> ToolDraft {
    let mut parameters = Vec::new();

    if let Some(declared) = operation.get("parameters").and_then(Value::as_array) {
        for param in declared {
            match param.get("name").and_then(Value::as_str) {
                Some(name) if !name.is_empty() => {
                    let param_type = ParamType::infer(param["schema"]["type"].as_str());
                    let description = param
                        .get("description")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("Parameter {}", name));
                    let required = param
                        .get("required")
                        .and_then(Value::as_bool)
                        .unwrap_or(false);
                    parameters.push(ParameterDraft::new(name, param_type, description, required));
                }
                _ => warn!("Skipping unnamed parameter on {} {}", method, path),
            }
        }
    }

    // Request bodies become one opaque string parameter, never decomposed
    if operation.get("requestBody").is_some_and(|v| !v.is_null()) {
        parameters.push(ParameterDraft::request_body());
    }

    let summary = non_empty_str(operation, "summary");
    let operation_id = non_empty_str(operation, "operationId");
    let described = non_empty_str(operation, "description");

    let name = summary
        .or(operation_id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", method, path));

    let description = described
        .or(summary)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Calls the {} endpoint", path));

    ToolDraft {
        name,
        code: generate_code(operation, method, path),
        description,
        endpoint_path: path.to_string(),
        http_method: method,
        parameters,
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
