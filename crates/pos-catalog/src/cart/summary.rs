//! Cart totals.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::Serialize;

/// One cart line as shown at the register.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub line_total: f64,
    /// Selected more units than the inventory holds.
    pub exceeds_stock: bool,
}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: product.selected_quantity,
            line_total: product.price * product.selected_quantity as f64,
            exceeds_stock: product.selected_quantity > product.quantity,
        }
    }
}

/// Totals for the whole cart.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CartSummary {
    /// Lines in the order products joined the cart.
    pub lines: Vec<CartLine>,
    /// Sum of selected quantities.
    pub item_count: i64,
    /// Sum of line totals.
    pub total: f64,
}

impl CartSummary {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let lines: Vec<CartLine> = products.into_iter().map(CartLine::from_product).collect();
        let item_count = lines.iter().map(|l| l.quantity).sum();
        let total = lines.iter().map(|l| l.line_total).sum();
        Self {
            lines,
            item_count,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines asking for more than is in stock.
    pub fn over_stock(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|l| l.exceeds_stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_totals() {
        let mut mug = Product::new(1, "Mug", 4.5).with_quantity(10);
        mug.selected_quantity = 2;
        let mut pen = Product::new(2, "Pen", 1.25).with_quantity(1);
        pen.selected_quantity = 3;

        let summary = CartSummary::from_products([&mug, &pen]);
        assert_eq!(summary.item_count, 5);
        assert!((summary.total - 12.75).abs() < 1e-9);
        assert_eq!(summary.lines[0].name, "Mug");

        let over: Vec<ProductId> = summary.over_stock().map(|l| l.product_id).collect();
        assert_eq!(over, vec![ProductId::new(2)]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::from_products(std::iter::empty());
        assert!(summary.is_empty());
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total, 0.0);
    }
}
