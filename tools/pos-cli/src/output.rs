//! Output formatting for the CLI.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use pos_catalog::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn status(&self, icon: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", icon, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.status(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg);
    }

    /// Warnings go to stderr so piped table output stays clean.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are always shown; in JSON mode as `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Section title.
    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Pretty-printed JSON document on stdout.
    pub fn json<T: serde::Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(doc) => println!("{}", doc),
            Err(e) => self.error(&format!("Failed to render JSON: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// One row of left-aligned columns; cells longer than their width are
    /// not truncated.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let mut row = String::from(" ");
        for (col, width) in cols.iter().zip(widths) {
            row.push(' ');
            row.push_str(&format!("{:<width$} ", col, width = *width));
        }
        println!("{}", row.trim_end());
    }

    /// Print products as a table.
    pub fn product_table<'a>(&self, products: impl IntoIterator<Item = &'a Product>) {
        const WIDTHS: [usize; 5] = [8, 28, 10, 8, 6];
        self.table_row(&["ID", "NAME", "PRICE", "STOCK", "IMAGE"], &WIDTHS);
        for product in products {
            let id = product.id.to_string();
            let price = format_price(product.price);
            let stock = product.quantity.to_string();
            let image = if product.has_image() { "yes" } else { "-" };
            self.table_row(
                &[id.as_str(), product.name.as_str(), price.as_str(), stock.as_str(), image],
                &WIDTHS,
            );
        }
    }

    /// Spinner shown while waiting on the API. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        let spinner = if self.json {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        if let Ok(template) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message(msg.to_owned());
        if !self.json {
            spinner.enable_steady_tick(std::time::Duration::from_millis(120));
        }
        spinner
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Format a price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Image size for display.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(&str, u64); 2] = [("MB", 1024 * 1024), ("KB", 1024)];
    UNITS
        .iter()
        .find(|(_, size)| bytes >= *size)
        .map(|(unit, size)| format!("{:.2} {}", bytes as f64 / *size as f64, unit))
        .unwrap_or_else(|| format!("{} B", bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(4.5), "4.50");
        assert_eq!(format_price(10.0), "10.00");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }
}
