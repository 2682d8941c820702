//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod products;

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use pos_catalog::image;
use pos_catalog::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List all products.
    List,
    /// Show one product.
    Show {
        /// Product ID.
        id: ProductId,
    },
    /// Search products by name. An empty query lists everything.
    Search {
        /// Search text.
        #[arg(default_value = "")]
        query: String,
    },
    /// Create a product.
    Create {
        /// Product name.
        #[arg(short, long)]
        name: String,
        /// Unit price.
        #[arg(short, long)]
        price: f64,
        /// Image file to upload.
        #[arg(short, long)]
        image: String,
        /// Proposed ID (random when omitted).
        #[arg(long)]
        id: Option<ProductId>,
    },
    /// Edit a product and save it.
    Update {
        /// Product ID.
        id: ProductId,
        /// New name.
        #[arg(short, long)]
        name: Option<String>,
        /// New unit price.
        #[arg(short, long)]
        price: Option<f64>,
        /// New stock quantity.
        #[arg(short, long)]
        quantity: Option<i64>,
        /// New image file.
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: ProductId,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Add one unit of a product (repeatable).
    #[arg(short, long)]
    pub add: Vec<ProductId>,

    /// Take one unit of a product back (repeatable).
    #[arg(short, long)]
    pub decrement: Vec<ProductId>,

    /// Remove a product from the cart entirely (repeatable).
    #[arg(short, long)]
    pub remove: Vec<ProductId>,

    /// Only offer products matching this search.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Read an image file the way an upload is read: into a data-URL.
pub(crate) fn read_image_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    Ok(image::to_data_url(image::mime_for_path(path), &bytes))
}
