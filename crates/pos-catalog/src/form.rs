//! Product form: what the catalog manager and inventory editor submit.

use pos_data::FormData;
use tracing::info;

use crate::api::ProductGateway;
use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::image::{self, ImageOptions};

/// What a successful [`ProductForm::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(ProductId),
    Updated(ProductId),
}

/// Editable product fields.
///
/// A form built with [`ProductForm::new`] creates a product; one loaded
/// from an existing product with [`ProductForm::for_product`] updates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub id: ProductId,
    pub name: String,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    /// Base64 image payload.
    pub image: Option<String>,
    editing: bool,
}

impl ProductForm {
    /// An empty form for a new product.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing product, in update mode.
    pub fn for_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: Some(product.price),
            quantity: Some(product.quantity),
            image: product.image.clone(),
            editing: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Take the image from an uploaded data-URL. An invalid upload leaves
    /// the form untouched.
    pub fn set_image_from_data_url(&mut self, data_url: &str) -> Result<(), CatalogError> {
        self.image = Some(image::payload_from_data_url(data_url)?);
        Ok(())
    }

    /// Name, price and image are all required.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let price_ok = self.price.is_some_and(f64::is_finite);
        let image_ok = self.image.as_deref().is_some_and(|i| !i.is_empty());
        if self.name.trim().is_empty() || !price_ok || !image_ok {
            return Err(CatalogError::ValidationError(
                "Please fill all the fields!".to_string(),
            ));
        }
        Ok(())
    }

    /// Multipart body for `POST`: `id`, `name`, `price`, `image`.
    ///
    /// An unassigned id is replaced by a random proposal.
    pub fn create_payload(&self, options: &ImageOptions) -> Result<FormData, CatalogError> {
        let id = if self.id.is_unassigned() {
            ProductId::generate()
        } else {
            self.id
        };
        let mut form = FormData::new();
        form.append("id", id.to_string())
            .append("name", self.name.clone())
            .append("price", self.price.unwrap_or_default().to_string());
        self.attach_image(&mut form, options)?;
        Ok(form)
    }

    /// Multipart body for `PUT`: `id`, `name`, `price`, `quantity`, `image`.
    ///
    /// `quantity` is left out when the form never had one, `image` when
    /// there is no image.
    pub fn update_payload(&self, options: &ImageOptions) -> Result<FormData, CatalogError> {
        let mut form = FormData::new();
        form.append("id", self.id.to_string())
            .append("name", self.name.clone())
            .append("price", self.price.unwrap_or_default().to_string());
        if let Some(quantity) = self.quantity {
            form.append("quantity", quantity.to_string());
        }
        self.attach_image(&mut form, options)?;
        Ok(form)
    }

    fn attach_image(&self, form: &mut FormData, options: &ImageOptions) -> Result<(), CatalogError> {
        if let Some(payload) = self.image.as_deref().filter(|i| !i.is_empty()) {
            let blob = image::base64_to_blob(payload, &options.content_type)?;
            form.set_file("image", blob.bytes, options.file_name.clone(), blob.content_type);
        }
        Ok(())
    }

    /// Validate and submit: update in update mode, create otherwise.
    pub async fn save(
        &self,
        gateway: &dyn ProductGateway,
        options: &ImageOptions,
    ) -> Result<SaveOutcome, CatalogError> {
        self.validate()?;
        if self.editing {
            gateway.update(self.id, self.update_payload(options)?).await?;
            info!(product_id = %self.id, "product updated");
            Ok(SaveOutcome::Updated(self.id))
        } else {
            let payload = self.create_payload(options)?;
            let id = payload
                .get_text("id")
                .and_then(|id| id.parse().ok())
                .unwrap_or(self.id);
            gateway.create(payload).await?;
            info!(product_id = %id, "product created");
            Ok(SaveOutcome::Created(id))
        }
    }

    /// Clear every field after a successful save.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
