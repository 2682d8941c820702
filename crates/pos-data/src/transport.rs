//! Request execution.
//!
//! `FetchClient` builds requests; a `Transport` puts them on the wire. The
//! default transport is reqwest. Tests swap in an in-memory one.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::form::{FormData, FormValue};
use crate::request::{Body, RequestBuilder};
use crate::{FetchError, Response};

/// Executes a fully built request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let mut builder = self.client.request(method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder = match request.body {
            Some(Body::Bytes(bytes)) => builder.body(bytes),
            Some(Body::Form(form)) => builder.multipart(into_multipart(form)?),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

fn into_multipart(form: FormData) -> Result<Form, FetchError> {
    let mut multipart = Form::new();
    for part in form.into_parts() {
        multipart = match part.value {
            FormValue::Text(text) => multipart.text(part.name, text),
            FormValue::File {
                bytes,
                file_name,
                content_type,
            } => {
                let file = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| FetchError::RequestError(e.to_string()))?;
                multipart.part(part.name, file)
            }
        };
    }
    Ok(multipart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_multipart_rejects_bad_mime() {
        let mut form = FormData::new();
        form.append_file("image", vec![1, 2, 3], "image.jpg", "not a mime");
        assert!(into_multipart(form).is_err());
    }

    #[test]
    fn test_into_multipart_accepts_product_form() {
        let mut form = FormData::new();
        form.append("id", "1")
            .append("name", "Mug")
            .append_file("image", vec![0xff, 0xd8], "image.jpg", "image/jpeg");
        assert!(into_multipart(form).is_ok());
    }
}
