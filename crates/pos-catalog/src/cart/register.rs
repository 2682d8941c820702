//! Point-of-sale register: the product list plus the cart built from it.

use tracing::{debug, info};

use crate::api::ProductGateway;
use crate::cart::CartSummary;
use crate::catalog::{Product, ProductStore};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Products on sale and the cart built from them.
///
/// Selected quantities live on the products in the store; the cart only
/// records which products joined and in what order. A product is in the cart
/// exactly when its `selected_quantity` is positive.
#[derive(Debug, Clone, Default)]
pub struct Register {
    store: ProductStore,
    cart: Vec<ProductId>,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let mut register = Self::new();
        register.load(products);
        register
    }

    /// Replace the product list. Everything starts unselected, so the cart
    /// empties.
    pub fn load(&mut self, products: Vec<Product>) {
        self.store.replace(products);
        self.cart.clear();
    }

    /// Fetch the full product list.
    pub async fn refresh(&mut self, gateway: &dyn ProductGateway) -> Result<usize, CatalogError> {
        let products = gateway.list().await?;
        info!(count = products.len(), "products loaded");
        self.load(products);
        Ok(self.store.len())
    }

    /// Search the catalog. An empty query reloads everything; a failed search
    /// shows no products.
    pub async fn search(
        &mut self,
        gateway: &dyn ProductGateway,
        query: &str,
    ) -> Result<usize, CatalogError> {
        if query.trim().is_empty() {
            debug!("search value is empty");
            return self.refresh(gateway).await;
        }
        let products = gateway.search(query).await;
        self.load(products);
        Ok(self.store.len())
    }

    /// Add one unit of a product. A product already in the cart gains a
    /// unit; otherwise it joins with a quantity of 1.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<i64, CatalogError> {
        let in_cart = self.is_product_in_cart(id);
        let product = self.store.require_mut(id)?;
        if in_cart {
            product.selected_quantity += 1;
        } else {
            product.selected_quantity = 1;
            self.cart.push(id);
        }
        Ok(product.selected_quantity)
    }

    /// One more unit, unconditionally. A product that was not in the cart
    /// joins it.
    pub fn increment_quantity(&mut self, id: ProductId) -> Result<i64, CatalogError> {
        let in_cart = self.is_product_in_cart(id);
        let product = self.store.require_mut(id)?;
        product.selected_quantity += 1;
        let quantity = product.selected_quantity;
        if !in_cart {
            self.cart.push(id);
        }
        Ok(quantity)
    }

    /// One unit fewer, never below zero. Reaching zero drops the product
    /// from the cart.
    pub fn decrement_quantity(&mut self, id: ProductId) -> Result<i64, CatalogError> {
        let product = self.store.require_mut(id)?;
        if product.selected_quantity > 0 {
            product.selected_quantity -= 1;
        }
        let quantity = product.selected_quantity;
        if quantity == 0 && self.is_product_in_cart(id) {
            self.remove_from_cart(id)?;
        }
        Ok(quantity)
    }

    /// Drop a product from the cart and reset its selected quantity.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.cart.retain(|cart_id| *cart_id != id);
        self.store.require_mut(id)?.selected_quantity = 0;
        Ok(())
    }

    pub fn is_product_in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(&id)
    }

    /// Empty the cart, keeping the product list.
    pub fn clear_cart(&mut self) {
        for id in self.cart.drain(..) {
            if let Some(product) = self.store.get_mut(id) {
                product.selected_quantity = 0;
            }
        }
    }

    /// Products in the cart, in the order they joined.
    pub fn cart(&self) -> impl Iterator<Item = &Product> {
        self.cart.iter().filter_map(|id| self.store.get(*id))
    }

    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_products(self.cart())
    }

    pub fn products(&self) -> &ProductStore {
        &self.store
    }
}
