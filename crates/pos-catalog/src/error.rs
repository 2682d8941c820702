//! Catalog error types.

use crate::ids::ProductId;
use pos_data::FetchError;
use thiserror::Error;

/// Errors that can occur in catalog, inventory and cart operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found in the local store.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product has no open edit.
    #[error("Product {0} is not being edited")]
    NotEditing(ProductId),

    /// Image payload could not be decoded.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Form validation failed; nothing was sent.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The product API call failed.
    #[error(transparent)]
    Api(#[from] FetchError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}

impl From<base64::DecodeError> for CatalogError {
    fn from(e: base64::DecodeError) -> Self {
        CatalogError::InvalidImage(e.to_string())
    }
}
