// The response shape serverless platforms expect back from a function:
// `{ "statusCode": 200, "headers": {...}, "body": "..." }`.

use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    fn with_content_type(status_code: u16, content_type: &str, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        Self::with_content_type(status_code, "text/plain; charset=utf-8", body.into())
    }

    /// A body that is already JSON and must not be re-encoded.
    pub fn raw_json(status_code: u16, body: impl Into<String>) -> Self {
        Self::with_content_type(status_code, "application/json", body.into())
    }

    /// `{"error": "<message>"}`
    pub fn error_envelope(status_code: u16, message: &str) -> Self {
        Self::raw_json(status_code, json!({ "error": message }).to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
