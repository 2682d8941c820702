//! Register: build a cart and print its total.

use anyhow::Result;
use pos_catalog::cart::Register;

use super::CartArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let gateway = ctx.gateway()?;
    let mut register = Register::new();

    let spinner = ctx.output.spinner("Loading products...");
    let loaded = match args.search.as_deref() {
        Some(query) => register.search(&gateway, query).await,
        None => register.refresh(&gateway).await,
    };
    spinner.finish_and_clear();
    loaded?;

    for id in &args.add {
        register.add_to_cart(*id)?;
    }
    for id in &args.decrement {
        register.decrement_quantity(*id)?;
    }
    for id in &args.remove {
        register.remove_from_cart(*id)?;
    }

    let summary = register.summary();
    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    if summary.is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }

    ctx.output.header("Cart");
    const WIDTHS: [usize; 5] = [8, 28, 10, 6, 10];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "QTY", "TOTAL"], &WIDTHS);
    for line in &summary.lines {
        let id = line.product_id.to_string();
        let price = format_price(line.unit_price);
        let qty = line.quantity.to_string();
        let total = format_price(line.line_total);
        ctx.output.table_row(
            &[id.as_str(), line.name.as_str(), price.as_str(), qty.as_str(), total.as_str()],
            &WIDTHS,
        );
    }
    println!();
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Total", &format_price(summary.total));

    for line in summary.over_stock() {
        ctx.output.warn(&format!(
            "{} has only {} in stock",
            line.name,
            register
                .products()
                .get(line.product_id)
                .map(|p| p.quantity)
                .unwrap_or_default()
        ));
    }

    Ok(())
}
