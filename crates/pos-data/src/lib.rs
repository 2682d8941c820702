//! HTTP client utilities for the storefront admin.
//!
//! Provides a small builder API for talking to the product REST API, with
//! JSON and multipart bodies and a pluggable [`Transport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pos_data::{FetchClient, FormData};
//!
//! let client = FetchClient::new().with_base_url("http://localhost:5262/");
//!
//! let products: Vec<serde_json::Value> = client
//!     .get("/api/products")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//!
//! let mut form = FormData::new();
//! form.append("id", "42").append("name", "Mug");
//! client.put("/api/products/42").multipart(form).send().await?;
//! ```

mod error;
mod form;
mod request;
mod response;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error};

pub use error::FetchError;
pub use form::{FormData, FormPart, FormValue};
pub use request::{Body, Method, RequestBuilder};
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};

/// HTTP client for making outbound requests.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client using the reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::default())
    }

    /// Create a client that executes requests through `transport`.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport: Arc::new(transport),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !is_absolute(&url) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Add a query string pair.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Set the request body as a multipart form.
    pub fn multipart(mut self, form: FormData) -> Self {
        self.builder = self.builder.multipart(form);
        self
    }

    /// The request as built so far.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the response.
    ///
    /// Every response is logged at debug level; transport failures at error
    /// level. Status codes are not checked here, see
    /// [`Response::error_for_status`].
    pub async fn send(self) -> Result<Response, FetchError> {
        let method = self.builder.method.as_str();
        let url = self.builder.url.clone();
        debug!(method, %url, "sending request");

        match self.transport.execute(self.builder).await {
            Ok(response) => {
                debug!(method, %url, status = response.status, "response intercepted");
                Ok(response)
            }
            Err(e) => {
                error!(method, %url, error = %e, "request failed");
                Err(e)
            }
        }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, FormData, Method, Response, Transport};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<RequestBuilder>>,
    }

    #[async_trait]
    impl Transport for Arc<Recorder> {
        async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.seen.lock().unwrap().push(request);
            Ok(Response::with_json(200, &serde_json::json!({ "ok": true })))
        }
    }

    struct Refused;

    #[async_trait]
    impl Transport for Refused {
        async fn execute(&self, _request: RequestBuilder) -> Result<Response, FetchError> {
            Err(FetchError::RequestError("connection refused".to_string()))
        }
    }

    #[test]
    fn test_base_url_joining() {
        let client = FetchClient::with_transport(Refused).with_base_url("http://localhost:5262/");
        assert_eq!(
            client.get("api/products").request().url(),
            "http://localhost:5262/api/products"
        );
        assert_eq!(
            client.get("/api/products/3").request().url(),
            "http://localhost:5262/api/products/3"
        );
        assert_eq!(
            client.get("https://other.example/x").request().url(),
            "https://other.example/x"
        );
    }

    #[test]
    fn test_default_headers_applied() {
        let client = FetchClient::with_transport(Refused).with_default_header("Accept", "application/json");
        let req = client.delete("http://localhost/api/products/1");
        assert_eq!(req.request().method(), Method::Delete);
        assert_eq!(
            req.request().headers().get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_send_goes_through_transport() {
        let recorder = Arc::new(Recorder::default());
        let client = FetchClient::with_transport(Arc::clone(&recorder)).with_base_url("http://api");

        let response = client
            .get("/api/products/search/")
            .query("query", "mug")
            .send()
            .await
            .unwrap();
        assert!(response.is_success());

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url(), "http://api/api/products/search/");
        assert_eq!(seen[0].query_pairs()[0].1, "mug");
    }

    #[tokio::test]
    async fn test_send_propagates_transport_error() {
        let client = FetchClient::with_transport(Refused);
        let err = client.get("http://api/x").send().await.unwrap_err();
        assert!(matches!(err, FetchError::RequestError(_)));
    }
}
