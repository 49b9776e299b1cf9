// src/web/types.rs
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use serde_json::Value;

/// Body of `POST /analyze-test-results`.
///
/// Read leniently: a missing or non-string `testType` routes to the generic
/// insights and a missing `results` is treated as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeTestResultsRequest {
    pub test_type: String,
    pub results: Value,
}

impl AnalyzeTestResultsRequest {
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                test_type: fields
                    .get("testType")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                results: fields.remove("results").unwrap_or(Value::Null),
            },
            _ => Self {
                test_type: String::new(),
                results: Value::Null,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Action,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub action: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

/// Error half of handler results: HTTP status plus the standard error body
pub type ApiError = (Status, Json<StandardErrorResponse>);

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: false,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl ActionResponse {
    pub fn success(message: String, action: String) -> Self {
        Self {
            response_type: ResponseType::Action,
            success: true,
            message,
            action,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn with_status(self, status: Status) -> ApiError {
        (status, Json(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_reads_fields() {
        let request = AnalyzeTestResultsRequest::from_body(json!({
            "testType": "RIASEC",
            "results": { "confidenceScore": 92 }
        }));
        assert_eq!(request.test_type, "RIASEC");
        assert_eq!(request.results, json!({ "confidenceScore": 92 }));
    }

    #[test]
    fn test_from_body_is_lenient() {
        let request = AnalyzeTestResultsRequest::from_body(json!({ "testType": 12 }));
        assert_eq!(request.test_type, "");
        assert_eq!(request.results, Value::Null);

        let request = AnalyzeTestResultsRequest::from_body(json!("RIASEC"));
        assert_eq!(request.test_type, "");
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(StandardErrorResponse::new(
            "Not found".to_string(),
            "TEST_RESULT_NOT_FOUND".to_string(),
            vec![],
        ))
        .unwrap();
        assert_eq!(body["type"], json!("error"));
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error_code"], json!("TEST_RESULT_NOT_FOUND"));
    }
}
