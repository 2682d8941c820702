//! Product API gateway.

use async_trait::async_trait;
use pos_data::{FetchClient, FormData};
use tracing::{debug, warn};

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Default base path of the product resource.
pub const DEFAULT_PRODUCTS_PATH: &str = "api/products";

/// CRUD access to the remote product catalog.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// `GET /`
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;

    /// `GET /{id}`
    async fn get(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// `GET /search/?query=`. Failures come back as an empty list.
    async fn search(&self, query: &str) -> Vec<Product>;

    /// `POST /` with a multipart product form.
    async fn create(&self, payload: FormData) -> Result<(), CatalogError>;

    /// `PUT /{id}` with a multipart product form.
    async fn update(&self, id: ProductId, payload: FormData) -> Result<(), CatalogError>;

    /// `DELETE /{id}`
    async fn delete(&self, id: ProductId) -> Result<(), CatalogError>;
}

/// Gateway talking to the product API over HTTP.
#[derive(Clone)]
pub struct HttpProductGateway {
    client: FetchClient,
    path: String,
}

impl HttpProductGateway {
    /// `client` should carry the API base URL.
    pub fn new(client: FetchClient) -> Self {
        Self::with_path(client, DEFAULT_PRODUCTS_PATH)
    }

    pub fn with_path(client: FetchClient, path: impl AsRef<str>) -> Self {
        Self {
            client,
            path: format!("/{}", path.as_ref().trim_matches('/')),
        }
    }

    fn item_path(&self, id: ProductId) -> String {
        format!("{}/{}", self.path, id)
    }

    async fn try_search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let products = self
            .client
            .get(format!("{}/search/", self.path))
            .query("query", query.to_lowercase())
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(products)
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = self
            .client
            .get(self.path.as_str())
            .send()
            .await?
            .error_for_status()?
            .json()?;
        debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    async fn get(&self, id: ProductId) -> Result<Product, CatalogError> {
        let product = self
            .client
            .get(self.item_path(id))
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(product)
    }

    async fn search(&self, query: &str) -> Vec<Product> {
        match self.try_search(query).await {
            Ok(products) => products,
            Err(e) => {
                warn!(query, error = %e, "search failed, showing no products");
                Vec::new()
            }
        }
    }

    async fn create(&self, payload: FormData) -> Result<(), CatalogError> {
        self.client
            .post(self.path.as_str())
            .multipart(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update(&self, id: ProductId, payload: FormData) -> Result<(), CatalogError> {
        self.client
            .put(self.item_path(id))
            .multipart(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        self.client
            .delete(self.item_path(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
