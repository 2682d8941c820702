//! HTTP request builder.

use crate::form::FormData;
use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Raw bytes, sent as-is.
    Bytes(Vec<u8>),
    /// Multipart form; the transport picks the boundary.
    Form(FormData),
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Body>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query string pair. Encoding happens in the transport.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(Body::Bytes(body.into()));
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(Body::Bytes(json));
        Ok(self)
    }

    /// Set the request body as a multipart form.
    ///
    /// No Content-Type header is set here; it carries the boundary and is
    /// written by the transport.
    pub fn multipart(mut self, form: FormData) -> Self {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case("content-type"));
        self.body = Some(Body::Form(form));
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn payload(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// The multipart form, if the body is one.
    pub fn form(&self) -> Option<&FormData> {
        match &self.body {
            Some(Body::Form(form)) => Some(form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_sets_content_type() {
        let req = RequestBuilder::new(Method::Post, "http://localhost/api")
            .json(&serde_json::json!({ "name": "Mug" }))
            .unwrap();
        assert_eq!(
            req.headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(matches!(req.payload(), Some(Body::Bytes(_))));
    }

    #[test]
    fn test_multipart_drops_explicit_content_type() {
        let mut form = FormData::new();
        form.append("id", "7");
        let req = RequestBuilder::new(Method::Put, "http://localhost/api/7")
            .header("content-type", "text/plain")
            .multipart(form);

        assert!(req.headers().is_empty());
        assert_eq!(req.form().and_then(|f| f.get_text("id")), Some("7"));
    }

    #[test]
    fn test_query_pairs_preserve_order() {
        let req = RequestBuilder::new(Method::Get, "http://localhost/search/")
            .query("query", "red mug")
            .query("page", "2");
        assert_eq!(
            req.query_pairs(),
            &[
                ("query".to_string(), "red mug".to_string()),
                ("page".to_string(), "2".to_string())
            ]
        );
    }
}
