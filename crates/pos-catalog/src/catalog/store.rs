//! In-memory product store.

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;

/// The last product list fetched from the API, in API order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a freshly fetched list.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut store = Self::new();
        store.replace(products);
        store
    }

    /// Replace the whole list. Every product starts unselected and not being
    /// edited, with its display URL derived.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        for product in &mut self.products {
            product.reset_view_state();
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Like `get`, but a missing product is an error.
    pub fn require(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.get(id).ok_or(CatalogError::ProductNotFound(id))
    }

    pub fn require_mut(&mut self, id: ProductId) -> Result<&mut Product, CatalogError> {
        self.get_mut(id).ok_or(CatalogError::ProductNotFound(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Remove a product, returning it if it was present.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Mug", 4.5),
            Product::new(2, "Pen", 1.0).with_image("aGk="),
        ]
    }

    #[test]
    fn test_replace_resets_view_state() {
        let mut products = sample();
        products[0].selected_quantity = 3;
        products[1].is_editing = true;
        products[1].image_url.clear();

        let store = ProductStore::from_products(products);
        assert!(store.iter().all(|p| p.selected_quantity == 0 && !p.is_editing));
        assert_eq!(
            store.get(ProductId::new(2)).unwrap().image_url,
            "data:image/jpg;base64,aGk="
        );
    }

    #[test]
    fn test_require_missing_product() {
        let store = ProductStore::from_products(sample());
        assert!(store.require(ProductId::new(1)).is_ok());
        assert!(matches!(
            store.require(ProductId::new(99)),
            Err(CatalogError::ProductNotFound(id)) if id == ProductId::new(99)
        ));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut store = ProductStore::from_products(vec![
            Product::new(1, "A", 1.0),
            Product::new(2, "B", 1.0),
            Product::new(3, "C", 1.0),
        ]);
        assert!(store.remove(ProductId::new(2)).is_some());
        assert!(store.remove(ProductId::new(2)).is_none());

        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(store.len(), 2);
    }
}
