//! Wire types for the registry admin API.
//!
//! The backend speaks camelCase JSON; these mirror its request and response
//! records and stay separate from the draft domain types.

use serde::{Deserialize, Serialize};

use crate::domain::{ApiKeyLocation, AuthType, HttpMethod, ParamType, ProviderDraft, ToolDraft};

/// Payload for creating a provider
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProviderRequest {
    pub name: String,
    pub code: String,
    pub base_url: String,
    pub authentication_type: AuthType,
    pub api_key_location: ApiKeyLocation,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key_value: String,
}

impl CreateProviderRequest {
    pub fn from_draft(draft: &ProviderDraft) -> Self {
        Self {
            name: draft.name.clone(),
            code: draft.code.clone(),
            base_url: draft.base_url.clone(),
            authentication_type: draft.auth.auth_type,
            api_key_location: draft.auth.api_key_location,
            api_key_name: draft.auth.api_key_name.clone(),
            api_key_value: draft.auth.api_key_value.clone(),
        }
    }
}

/// One tool in the batch payload: draft fields plus the owning provider id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub name: String,
    pub code: String,
    pub enabled: bool,
    pub description: String,
    pub provider_id: u64,
    pub endpoint_path: String,
    pub http_method: HttpMethod,
    pub parameters: Vec<ParameterRecord>,
}

impl ToolRecord {
    pub fn from_draft(draft: &ToolDraft, provider_id: u64) -> Self {
        Self {
            name: draft.name.clone(),
            code: draft.code.clone(),
            enabled: true,
            description: draft.description.clone(),
            provider_id,
            endpoint_path: draft.endpoint_path.clone(),
            http_method: draft.http_method,
            parameters: draft
                .parameters
                .iter()
                .map(ParameterRecord::from_draft)
                .collect(),
        }
    }
}

/// One parameter inside a tool batch entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
}

impl ParameterRecord {
    pub fn from_draft(draft: &crate::domain::ParameterDraft) -> Self {
        Self {
            name: draft.name.clone(),
            param_type: draft.param_type,
            description: draft.description.clone(),
            required: draft.required,
        }
    }
}

/// Response from provider creation
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCreated {
    pub id: u64,
}

/// Response from batch tool creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreated {
    pub created_count: u64,
}

/// Response from the bundle pass-through import
#[derive(Debug, Clone, Deserialize)]
pub struct BundleImported {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthConfig, ParameterDraft};
    use serde_json::json;

    #[test]
    fn test_create_provider_request_serializes_camel_case() {
        let draft = ProviderDraft::new("Weather API", "weather-api")
            .with_base_url("https://api.weather.test");
        let request = CreateProviderRequest::from_draft(&draft);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Weather API",
                "code": "weather-api",
                "baseUrl": "https://api.weather.test",
                "authenticationType": "NONE",
                "apiKeyLocation": "HEADER"
            })
        );
    }

    #[test]
    fn test_create_provider_request_includes_api_key_fields_when_set() {
        let draft = ProviderDraft::new("Secure", "secure").with_auth(AuthConfig {
            auth_type: AuthType::ApiKey,
            api_key_location: ApiKeyLocation::Query,
            api_key_name: "key".to_string(),
            api_key_value: "s3cret".to_string(),
        });

        let value = serde_json::to_value(CreateProviderRequest::from_draft(&draft)).unwrap();
        assert_eq!(value["authenticationType"], "API_KEY");
        assert_eq!(value["apiKeyLocation"], "QUERY");
        assert_eq!(value["apiKeyName"], "key");
        assert_eq!(value["apiKeyValue"], "s3cret");
    }

    #[test]
    fn test_tool_record_from_draft() {
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

        let record = ToolRecord::from_draft(&draft, 7);
        assert!(record.enabled);
        assert_eq!(record.provider_id, 7);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["providerId"], 7);
        assert_eq!(value["endpointPath"], "/users");
        assert_eq!(value["httpMethod"], "GET");
        assert_eq!(value["parameters"][0]["type"], "NUMBER");
        assert_eq!(value["parameters"][0]["required"], false);
    }

    #[test]
    fn test_response_deserialization() {
        let created: ProviderCreated = serde_json::from_str(r#"{"id": 12, "name": "x"}"#).unwrap();
        assert_eq!(created.id, 12);

        let batch: BatchCreated = serde_json::from_str(r#"{"createdCount": 4}"#).unwrap();
        assert_eq!(batch.created_count, 4);

        let bundle: BundleImported =
            serde_json::from_str(r#"{"message": "Import successful"}"#).unwrap();
        assert_eq!(bundle.message, "Import successful");
    }
}
