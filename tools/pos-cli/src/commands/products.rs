//! Catalog management: list, search, create, edit and delete products.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use pos_catalog::catalog::Product;
use pos_catalog::form::{ProductForm, SaveOutcome};
use pos_catalog::image;
use pos_catalog::inventory::Inventory;
use pos_catalog::{ProductGateway, ProductId};

use super::{read_image_data_url, ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::{format_bytes, format_price};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let gateway = ctx.gateway()?;

    match args.command {
        ProductsCommand::List => {
            let spinner = ctx.output.spinner("Loading products...");
            let products = gateway.list().await;
            spinner.finish_and_clear();
            print_products(ctx, &products?);
        }
        ProductsCommand::Show { id } => {
            let product = gateway.get(id).await?;
            show_product(ctx, &product);
        }
        ProductsCommand::Search { query } => {
            let spinner = ctx.output.spinner("Searching...");
            let products = if query.trim().is_empty() {
                gateway.list().await?
            } else {
                gateway.search(&query).await
            };
            spinner.finish_and_clear();
            print_products(ctx, &products);
        }
        ProductsCommand::Create {
            name,
            price,
            image,
            id,
        } => {
            let mut form = ProductForm::new();
            form.id = id.unwrap_or(ProductId::UNASSIGNED);
            form.name = name;
            form.price = Some(price);
            form.set_image_from_data_url(&read_image_data_url(&ctx.resolve_path(&image))?)?;

            let outcome = form.save(&gateway, &ctx.image_options()).await?;
            if let SaveOutcome::Created(id) = outcome {
                if ctx.output.is_json() {
                    ctx.output.json(&serde_json::json!({ "created": id }));
                } else {
                    ctx.output
                        .success(&format!("Product created successfully! (id {})", id));
                }
            }
        }
        ProductsCommand::Update {
            id,
            name,
            price,
            quantity,
            image,
        } => {
            if name.is_none() && price.is_none() && quantity.is_none() && image.is_none() {
                bail!("Nothing to update. Pass at least one of --name, --price, --quantity, --image.");
            }

            let mut inventory = Inventory::new();
            inventory.refresh(&gateway).await?;
            inventory.edit(id)?;
            if let Some(name) = name {
                inventory.set_name(id, name)?;
            }
            if let Some(price) = price {
                inventory.set_price(id, price)?;
            }
            if let Some(quantity) = quantity {
                inventory.set_quantity(id, quantity)?;
            }
            if let Some(path) = image {
                let data_url = read_image_data_url(&ctx.resolve_path(&path))?;
                inventory.set_image_from_data_url(id, &data_url)?;
            }

            let spinner = ctx.output.spinner("Saving changes...");
            let saved = inventory
                .save_changes(id, &gateway, &ctx.image_options())
                .await;
            spinner.finish_and_clear();
            saved?;

            let product = inventory.products().require(id)?;
            if ctx.output.is_json() {
                ctx.output.json(product);
            } else {
                ctx.output.success("Product updated successfully!");
                show_product(ctx, product);
            }
        }
        ProductsCommand::Delete { id, yes } => {
            let mut inventory = Inventory::new();
            inventory.refresh(&gateway).await?;
            let name = inventory.products().require(id)?.name.clone();

            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Are you sure you want to delete this product? ({})",
                        name
                    ))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.info("Delete cancelled");
                    return Ok(());
                }
            }

            inventory.delete(id, &gateway).await?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "deleted": id }));
            } else {
                ctx.output.success("Product deleted successfully!");
            }
        }
    }

    Ok(())
}

fn print_products(ctx: &Context, products: &[Product]) {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    if products.is_empty() {
        ctx.output.info("No products found");
        return;
    }

    ctx.output.header("Products");
    ctx.output.product_table(products);
    if ctx.output.is_verbose() {
        ctx.output.kv("Count", &products.len().to_string());
    }
}

fn show_product(ctx: &Context, product: &Product) {
    if ctx.output.is_json() {
        ctx.output.json(product);
        return;
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", &product.id.to_string());
    ctx.output.kv("Price", &format_price(product.price));
    ctx.output.kv("Stock", &product.quantity.to_string());
    match product.image.as_deref().map(image::decode) {
        Some(Ok(bytes)) => ctx.output.kv("Image", &format_bytes(bytes.len() as u64)),
        Some(Err(_)) => ctx.output.kv("Image", "invalid"),
        None => ctx.output.kv("Image", "-"),
    }
}
