//! Inventory editor: inline edit, cancel and save of catalog products.

use tracing::{info, warn};

use crate::api::ProductGateway;
use crate::catalog::{Product, ProductStore};
use crate::error::CatalogError;
use crate::form::ProductForm;
use crate::ids::ProductId;
use crate::image::{self, ImageOptions};

/// Where the editor stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing(ProductId),
}

/// The product list with at most one product open for editing.
///
/// `edit` snapshots the product; `cancel` puts the snapshot back; a
/// successful `save_changes` keeps the edited values and drops the snapshot.
/// A failed save leaves the product in the editing state.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    store: ProductStore,
    previous: Option<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let mut inventory = Self::new();
        inventory.load(products);
        inventory
    }

    /// Replace the product list. Any open edit is dropped.
    pub fn load(&mut self, products: Vec<Product>) {
        self.store.replace(products);
        self.previous = None;
    }

    pub async fn refresh(&mut self, gateway: &dyn ProductGateway) -> Result<usize, CatalogError> {
        let products = gateway.list().await?;
        self.load(products);
        Ok(self.store.len())
    }

    pub fn products(&self) -> &ProductStore {
        &self.store
    }

    pub fn state(&self) -> EditState {
        match &self.previous {
            Some(snapshot) => EditState::Editing(snapshot.id),
            None => EditState::Viewing,
        }
    }

    /// Open a product for editing.
    ///
    /// Opening a second product first cancels the one already open. Opening
    /// the same product again keeps the original snapshot.
    pub fn edit(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.store.require(id)?;
        match self.state() {
            EditState::Editing(open) if open == id => return Ok(()),
            EditState::Editing(open) => self.cancel(open)?,
            EditState::Viewing => {}
        }

        let product = self.store.require_mut(id)?;
        product.is_editing = true;
        self.previous = Some(product.clone());
        Ok(())
    }

    /// Restore every field from the snapshot and leave editing.
    pub fn cancel(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let snapshot = match self.previous.take() {
            Some(snapshot) if snapshot.id == id => snapshot,
            other => {
                self.previous = other;
                return Err(CatalogError::NotEditing(id));
            }
        };
        let product = self.store.require_mut(id)?;
        *product = snapshot;
        product.is_editing = false;
        Ok(())
    }

    /// The product currently open for editing.
    pub fn editing(&self, id: ProductId) -> Result<&Product, CatalogError> {
        let product = self.store.require(id)?;
        if !product.is_editing {
            return Err(CatalogError::NotEditing(id));
        }
        Ok(product)
    }

    /// Mutable access to the product open for editing.
    pub fn editing_mut(&mut self, id: ProductId) -> Result<&mut Product, CatalogError> {
        let product = self.store.require_mut(id)?;
        if !product.is_editing {
            return Err(CatalogError::NotEditing(id));
        }
        Ok(product)
    }

    pub fn set_name(&mut self, id: ProductId, name: impl Into<String>) -> Result<(), CatalogError> {
        self.editing_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_price(&mut self, id: ProductId, price: f64) -> Result<(), CatalogError> {
        self.editing_mut(id)?.price = price;
        Ok(())
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), CatalogError> {
        self.editing_mut(id)?.quantity = quantity;
        Ok(())
    }

    /// Replace the image from an uploaded data-URL. An invalid upload is
    /// rejected and the product keeps its current image.
    pub fn set_image_from_data_url(
        &mut self,
        id: ProductId,
        data_url: &str,
    ) -> Result<(), CatalogError> {
        self.editing(id)?;
        let payload = image::payload_from_data_url(data_url)?;
        self.editing_mut(id)?.set_image(payload);
        Ok(())
    }

    /// Submit the open product to the API.
    pub async fn save_changes(
        &mut self,
        id: ProductId,
        gateway: &dyn ProductGateway,
        options: &ImageOptions,
    ) -> Result<(), CatalogError> {
        let payload = ProductForm::for_product(self.editing(id)?).update_payload(options)?;

        if let Err(e) = gateway.update(id, payload).await {
            warn!(product_id = %id, error = %e, "saving product failed, still editing");
            return Err(e);
        }

        self.editing_mut(id)?.is_editing = false;
        if self.previous.as_ref().is_some_and(|p| p.id == id) {
            self.previous = None;
        }
        info!(product_id = %id, "product saved");
        Ok(())
    }

    /// Delete a product through the API and drop it from the list.
    pub async fn delete(
        &mut self,
        id: ProductId,
        gateway: &dyn ProductGateway,
    ) -> Result<(), CatalogError> {
        gateway.delete(id).await?;
        self.store.remove(id);
        if self.previous.as_ref().is_some_and(|p| p.id == id) {
            self.previous = None;
        }
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}
