use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body returned for every failed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw_response: None,
            generated_data: None,
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_response_omits_missing_diagnostics() {
        let value = serde_json::to_value(ErrorResponse::new("Server Error: API key not configured.")).unwrap();
        assert_eq!(value, json!({ "error": "Server Error: API key not configured." }));
    }

    #[test]
    fn test_error_response_uses_camel_case_keys() {
        let mut response = ErrorResponse::new("bad");
        response.raw_response = Some("raw".to_string());
        response.generated_data = Some(json!([1]));

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["rawResponse"], "raw");
        assert_eq!(value["generatedData"], json!([1]));
        assert!(value.get("details").is_none());
    }
}
