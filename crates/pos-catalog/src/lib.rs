//! Catalog, inventory and point-of-sale logic for the storefront admin.
//!
//! This crate holds the state behind the three admin screens:
//!
//! - **Catalog**: product records and the store of the last fetched list
//! - **Cart**: the point-of-sale register and its totals
//! - **Inventory**: inline edit / cancel / save of products
//! - **Image**: base64 ⇄ binary conversion for product images
//!
//! All remote calls go through a [`ProductGateway`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pos_catalog::prelude::*;
//! use pos_data::FetchClient;
//!
//! let gateway = HttpProductGateway::new(
//!     FetchClient::new().with_base_url("http://localhost:5262/"),
//! );
//!
//! let mut register = Register::new();
//! register.refresh(&gateway).await?;
//! register.add_to_cart(ProductId::new(1))?;
//! println!("Total: {:.2}", register.summary().total);
//!
//! let mut inventory = Inventory::new();
//! inventory.refresh(&gateway).await?;
//! inventory.edit(ProductId::new(1))?;
//! inventory.set_price(ProductId::new(1), 5.0)?;
//! inventory.save_changes(ProductId::new(1), &gateway, &ImageOptions::default()).await?;
//! ```

pub mod api;
pub mod error;
pub mod form;
pub mod ids;
pub mod image;

pub mod cart;
pub mod catalog;
pub mod inventory;

pub use api::{HttpProductGateway, ProductGateway};
pub use error::CatalogError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{HttpProductGateway, ProductGateway};
    pub use crate::error::CatalogError;
    pub use crate::form::{ProductForm, SaveOutcome};
    pub use crate::ids::ProductId;
    pub use crate::image::{ImageBlob, ImageOptions};

    pub use crate::cart::{CartLine, CartSummary, Register};
    pub use crate::catalog::{Product, ProductStore};
    pub use crate::inventory::{EditState, Inventory};
}
