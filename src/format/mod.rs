//! Output formatting for products (table, JSON, markdown, CSV).

use crate::catalog::Product;
use crate::config::{Config, OutputFormat};

/// Message shown when no product passes the filters.
pub const NO_MATCHES: &str = "No products match the filter.";

/// Truncates `text` to `max` characters, appending `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
    currency_symbol: String,
    description_limit: usize,
}

impl Formatter {
    /// Creates a new formatter with default currency and description limit.
    pub fn new(format: OutputFormat) -> Self {
        let defaults = Config::default();
        Self {
            format,
            currency_symbol: defaults.currency_symbol,
            description_limit: defaults.description_limit,
        }
    }

    /// Creates a formatter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            format: config.format,
            currency_symbol: config.currency_symbol.clone(),
            description_limit: config.description_limit,
        }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => NO_MATCHES.to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats the category choices.
    pub fn format_categories(&self, categories: &[String]) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(categories).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Markdown => {
                categories.iter().map(|c| format!("- {}", c)).collect::<Vec<_>>().join("\n")
            }
            OutputFormat::Csv => {
                let mut lines = vec!["category".to_string()];
                lines.extend(categories.iter().map(|c| Self::csv_escape(c)));
                lines.join("\n")
            }
            OutputFormat::Table => categories.join("\n"),
        }
    }

    fn price(&self, product: &Product) -> String {
        format!("{}{:.2}", self.currency_symbol, product.price)
    }

    fn description(&self, product: &Product) -> String {
        truncate(product.description_or_empty(), self.description_limit)
    }

    // JSON formatting

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, products: &[Product]) -> String {
        let mut cards = Vec::new();

        for product in products {
            let mut lines = Vec::new();
            lines.push(product.product_name.clone());
            lines.push(format!("  Price:       {}", self.price(product)));
            lines.push(format!("  Category:    {}", product.category));
            lines.push(format!("  Description: {}", self.description(product)));
            lines.push(format!("  Rating:      {}", product.rating));
            cards.push(lines.join("\n"));
        }

        cards.push(format!("Total: {} products", products.len()));
        cards.join("\n\n")
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Name | Price | Category | Rating | Description |".to_string());
        lines.push("|----|------|-------|----------|--------|-------------|".to_string());

        for product in products {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} |",
                product.id,
                Self::markdown_escape(&product.product_name),
                self.price(product),
                Self::markdown_escape(&product.category),
                product.rating,
                Self::markdown_escape(&self.description(product)),
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    fn markdown_escape(s: &str) -> String {
        s.replace('|', "\\|").replace('\n', " ")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "id,product_name,price,category,rating,description".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{},{},{}",
                Self::csv_escape(&product.id.to_string()),
                Self::csv_escape(&product.product_name),
                product.price,
                Self::csv_escape(&product.category),
                product.rating,
                Self::csv_escape(product.description_or_empty()),
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product::new(1, "Red T-Shirt", "Clothing", 499.0, 4.5)
            .with_description("Soft, breathable \"premium\" cotton")
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 200), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("", 3), "");
        // Counts characters, not bytes
        assert_eq!(truncate("₹₹₹₹", 2), "₹₹...");
    }

    #[test]
    fn test_empty_products() {
        assert_eq!(Formatter::new(OutputFormat::Table).format_products(&[]), NO_MATCHES);
        assert_eq!(Formatter::new(OutputFormat::Markdown).format_products(&[]), NO_MATCHES);
        assert_eq!(Formatter::new(OutputFormat::Json).format_products(&[]), "[]");
        assert_eq!(
            Formatter::new(OutputFormat::Csv).format_products(&[]),
            "id,product_name,price,category,rating,description"
        );
    }

    #[test]
    fn test_table_output() {
        let output = Formatter::new(OutputFormat::Table).format_products(&[make_product()]);
        assert!(output.contains("Red T-Shirt"));
        assert!(output.contains("Price:       ₹499.00"));
        assert!(output.contains("Category:    Clothing"));
        assert!(output.contains("Rating:      4.5"));
        assert!(output.contains("Total: 1 products"));
    }

    #[test]
    fn test_table_truncates_description() {
        let config = Config { description_limit: 10, ..Config::default() };
        let product = make_product().with_description("a".repeat(30));

        let output = Formatter::from_config(&config).format_products(&[product]);
        assert!(output.contains(&format!("Description: {}...", "a".repeat(10))));
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let product = Product::new(2, "Mug", "Kitchen", 120.0, 3.9);
        let output = Formatter::new(OutputFormat::Table).format_products(&[product]);
        assert!(output.contains("Description: \n  Rating:      3.9"));
    }

    #[test]
    fn test_custom_currency() {
        let config = Config { currency_symbol: "$".to_string(), ..Config::default() };
        let output = Formatter::from_config(&config).format_products(&[make_product()]);
        assert!(output.contains("$499.00"));
    }

    #[test]
    fn test_json_output() {
        let output = Formatter::new(OutputFormat::Json).format_products(&[make_product()]);
        assert!(output.starts_with('['));

        let parsed: Vec<Product> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0].product_name, "Red T-Shirt");
    }

    #[test]
    fn test_markdown_output() {
        let output = Formatter::new(OutputFormat::Markdown).format_products(&[make_product()]);
        assert!(output.starts_with("| ID | Name |"));
        assert!(output.contains("| 1 | Red T-Shirt | ₹499.00 | Clothing | 4.5 |"));
        assert!(output.contains("*1 products found*"));
    }

    #[test]
    fn test_csv_output_escapes() {
        let output = Formatter::new(OutputFormat::Csv).format_products(&[make_product()]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            r#"1,Red T-Shirt,499,Clothing,4.5,"Soft, breathable ""premium"" cotton""#
        );
    }

    #[test]
    fn test_format_categories() {
        let categories = vec!["All".to_string(), "Bags".to_string()];

        assert_eq!(Formatter::new(OutputFormat::Table).format_categories(&categories), "All\nBags");
        assert_eq!(
            Formatter::new(OutputFormat::Markdown).format_categories(&categories),
            "- All\n- Bags"
        );
        assert_eq!(
            Formatter::new(OutputFormat::Csv).format_categories(&categories),
            "category\nAll\nBags"
        );

        let json = Formatter::new(OutputFormat::Json).format_categories(&categories);
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, categories);
    }
}
