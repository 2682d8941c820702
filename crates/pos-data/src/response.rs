//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A response with a JSON body and no headers.
    pub fn with_json(status: u16, value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the body is empty or only whitespace.
    ///
    /// The product API answers deletes and updates with an empty body, which
    /// callers must not feed to `json`.
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = match self.text() {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => reason_phrase(self.status).to_string(),
        };
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(300, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Data {
            value: i32,
        }

        let resp = make_response(200, br#"{"value": 42}"#);
        let data: Data = resp.json().unwrap();
        assert_eq!(data, Data { value: 42 });
        assert!(make_response(200, b"not json").json::<Data>().is_err());
    }

    #[test]
    fn test_response_is_empty() {
        assert!(make_response(204, b"").is_empty());
        assert!(make_response(200, b" \n").is_empty());
        assert!(!make_response(200, b"{}").is_empty());
    }

    #[test]
    fn test_header_case_insensitive() {
        let resp = Response::with_json(200, &serde_json::json!([]));
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_error_for_status_uses_body() {
        let err = make_response(400, b"name is required")
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.to_string(), "Server-side error: 400 name is required");
    }

    #[test]
    fn test_error_for_status_falls_back_to_reason() {
        let err = make_response(404, b"").error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "Server-side error: 404 Not Found");
        assert!(make_response(201, b"").error_for_status().is_ok());
    }
}
