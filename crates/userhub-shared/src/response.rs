//! Response envelope: `{code, data}` on success, `{code, message}` on failure.

use serde::{Deserialize, Serialize};

/// Successful API response wrapper.
///
/// `data` is omitted entirely when the handler produced nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(code: u16, data: T) -> Self {
        Self {
            code,
            data: Some(data),
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(200, data)
    }

    pub fn created(data: T) -> Self {
        Self::new(201, data)
    }
}

impl ApiResponse<()> {
    /// Envelope with no `data` key.
    pub fn empty(code: u16) -> Self {
        Self { code, data: None }
    }
}

/// Failed API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::empty(201)).unwrap();
        assert_eq!(body, json!({ "code": 201 }));
    }

    #[test]
    fn test_null_data_is_kept() {
        let body = serde_json::to_value(ApiResponse::ok(serde_json::Value::Null)).unwrap();
        assert_eq!(body, json!({ "code": 200, "data": null }));
    }

    #[test]
    fn test_error_envelope() {
        let body = serde_json::to_value(ErrorResponse::not_found("Email not found")).unwrap();
        assert_eq!(body, json!({ "code": 404, "message": "Email not found" }));
    }
}
