//! HttpProductGateway against a scripted transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pos_catalog::prelude::*;
use pos_data::{FetchClient, FetchError, FormData, Method, RequestBuilder, Response, Transport};
use serde_json::json;

/// Replies with queued responses and records every request. Clones share
/// the same queue.
#[derive(Clone, Default)]
struct Script {
    replies: Arc<Mutex<VecDeque<Result<Response, FetchError>>>>,
    seen: Arc<Mutex<Vec<RequestBuilder>>>,
}

impl Script {
    fn reply(self, reply: Result<Response, FetchError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    fn seen(&self) -> Vec<RequestBuilder> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for Script {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.seen.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Ok(Response::new(204, Default::default(), Vec::new())))
    }
}

fn gateway(script: &Script) -> HttpProductGateway {
    let client = FetchClient::with_transport(script.clone())
        .with_base_url("http://localhost:5262/");
    HttpProductGateway::new(client)
}

#[tokio::test]
async fn test_list_products() {
    let script = Script::default().reply(Ok(Response::with_json(
        200,
        &json!([
            { "id": 1, "name": "Mug", "price": 4.5, "quantity": 10, "image": null },
            { "id": 2, "name": "Pen", "price": 1.0, "quantity": 3, "image": "aGk=" }
        ]),
    )));

    let products = gateway(&script).list().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].image.as_deref(), Some("aGk="));

    let seen = script.seen();
    assert_eq!(seen[0].method(), Method::Get);
    assert_eq!(seen[0].url(), "http://localhost:5262/api/products");
}

#[tokio::test]
async fn test_get_product_path() {
    let script = Script::default().reply(Ok(Response::with_json(
        200,
        &json!({ "id": 7, "name": "Lamp", "price": 20, "quantity": 1 }),
    )));

    let product = gateway(&script).get(ProductId::new(7)).await.unwrap();
    assert_eq!(product.name, "Lamp");
    assert_eq!(script.seen()[0].url(), "http://localhost:5262/api/products/7");
}

#[tokio::test]
async fn test_list_reports_server_error() {
    let script = Script::default().reply(Ok(Response::new(
        500,
        Default::default(),
        b"database offline".to_vec(),
    )));

    let err = gateway(&script).list().await.unwrap_err();
    assert_eq!(err.to_string(), "Server-side error: 500 database offline");
}

#[tokio::test]
async fn test_search_lowercases_query() {
    let script = Script::default().reply(Ok(Response::with_json(
        200,
        &json!([{ "id": 1, "name": "Red Mug", "price": 4.5 }]),
    )));

    let products = gateway(&script).search("RED Mug").await;
    assert_eq!(products.len(), 1);

    let seen = script.seen();
    assert_eq!(seen[0].url(), "http://localhost:5262/api/products/search/");
    assert_eq!(
        seen[0].query_pairs(),
        &[("query".to_string(), "red mug".to_string())]
    );
}

#[tokio::test]
async fn test_search_failure_is_empty() {
    let script = Script::default()
        .reply(Err(FetchError::RequestError("connection refused".to_string())));
    assert!(gateway(&script).search("mug").await.is_empty());

    let script = Script::default()
        .reply(Ok(Response::new(404, Default::default(), Vec::new())));
    assert!(gateway(&script).search("mug").await.is_empty());
}

#[tokio::test]
async fn test_create_posts_multipart() {
    let script = Script::default();
    let mut form = FormData::new();
    form.append("id", "5").append("name", "Mug");

    gateway(&script).create(form).await.unwrap();

    let seen = script.seen();
    assert_eq!(seen[0].method(), Method::Post);
    assert_eq!(seen[0].url(), "http://localhost:5262/api/products");
    assert_eq!(seen[0].form().and_then(|f| f.get_text("name")), Some("Mug"));
}

#[tokio::test]
async fn test_update_and_delete_paths() {
    let script = Script::default();
    let gateway = gateway(&script);

    gateway
        .update(ProductId::new(3), FormData::new())
        .await
        .unwrap();
    gateway.delete(ProductId::new(3)).await.unwrap();

    let seen = script.seen();
    assert_eq!(seen[0].method(), Method::Put);
    assert_eq!(seen[0].url(), "http://localhost:5262/api/products/3");
    assert_eq!(seen[1].method(), Method::Delete);
    assert_eq!(seen[1].url(), "http://localhost:5262/api/products/3");
}

#[tokio::test]
async fn test_custom_products_path() {
    let script = Script::default().reply(Ok(Response::with_json(200, &json!([]))));
    let client = FetchClient::with_transport(script.clone()).with_base_url("http://api");
    let gateway = HttpProductGateway::with_path(client, "/v2/items/");

    gateway.list().await.unwrap();
    assert_eq!(script.seen()[0].url(), "http://api/v2/items");
}
