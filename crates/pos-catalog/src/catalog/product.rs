//! Product record.

use crate::ids::ProductId;
use crate::image;
use serde::{Deserialize, Serialize};

/// A product as returned by the product API, plus the view state the admin
/// screens attach to it.
///
/// Only `id`, `name`, `price`, `quantity` and `image` travel over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier assigned by the API.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Units in stock.
    #[serde(default)]
    pub quantity: i64,
    /// Base64 image payload, without data-URL prefix.
    #[serde(default)]
    pub image: Option<String>,
    /// Units picked at the register. Never persisted.
    #[serde(skip)]
    pub selected_quantity: i64,
    /// Display URL derived from `image`.
    #[serde(skip)]
    pub image_url: String,
    /// Whether the inventory editor has this product open.
    #[serde(skip)]
    pub is_editing: bool,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.set_image(image.into());
        self
    }

    /// Replace the image payload and re-derive the display URL.
    pub fn set_image(&mut self, image: String) {
        self.image = Some(image);
        self.refresh_image_url();
    }

    /// Derive `image_url` from `image`; empty when there is no image.
    pub fn refresh_image_url(&mut self) {
        self.image_url = match self.image.as_deref() {
            Some(payload) if !payload.is_empty() => image::display_url(payload),
            _ => String::new(),
        };
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|i| !i.is_empty())
    }

    /// Reset the view state the way a fresh fetch does.
    pub(crate) fn reset_view_state(&mut self) {
        self.selected_quantity = 0;
        self.is_editing = false;
        self.refresh_image_url();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_product() {
        let json = r#"{"id": 5, "name": "Mug", "price": 4.5, "quantity": 12, "image": "aGVsbG8="}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.quantity, 12);
        assert_eq!(product.image.as_deref(), Some("aGVsbG8="));
        assert_eq!(product.selected_quantity, 0);
        assert!(!product.is_editing);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let product: Product = serde_json::from_str(r#"{"id": 1, "name": "Pen", "price": 1}"#).unwrap();
        assert_eq!(product.quantity, 0);
        assert!(product.image.is_none());
        assert!(!product.has_image());
    }

    #[test]
    fn test_view_state_is_not_serialized() {
        let mut product = Product::new(1, "Pen", 1.25).with_image("aGVsbG8=");
        product.selected_quantity = 3;
        product.is_editing = true;

        let value = serde_json::to_value(&product).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("id"));
        assert!(!object.contains_key("selectedQuantity"));
        assert!(!object.contains_key("isEditing"));
        assert!(!object.contains_key("imageUrl"));
    }

    #[test]
    fn test_image_url_derivation() {
        let mut product = Product::new(1, "Pen", 1.0);
        product.refresh_image_url();
        assert_eq!(product.image_url, "");

        product.set_image("aGVsbG8=".to_string());
        assert_eq!(product.image_url, "data:image/jpg;base64,aGVsbG8=");
    }

    #[test]
    fn test_reset_view_state() {
        let mut product = Product::new(1, "Pen", 1.0);
        product.selected_quantity = 4;
        product.is_editing = true;
        product.image = Some("aGk=".to_string());
        product.reset_view_state();

        assert_eq!(product.selected_quantity, 0);
        assert!(!product.is_editing);
        assert_eq!(product.image_url, "data:image/jpg;base64,aGk=");
    }
}
