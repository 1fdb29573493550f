//! Data models for catalog products.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier as it appears in the catalog file (number or string).
///
/// Variant order matters for untagged decoding: the narrowest numeric type
/// that fits wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Numeric(id) => write!(f, "{}", id),
            ProductId::Signed(id) => write!(f, "{}", id),
            ProductId::Float(id) => write!(f, "{}", id),
            ProductId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Numeric(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

/// A catalog product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Display name
    pub product_name: String,
    /// Free-text description, may be missing
    #[serde(default)]
    pub description: Option<String>,
    /// Category label (may carry stray whitespace)
    pub category: String,
    /// Price in the catalog currency
    pub price: f64,
    /// Rating used for ordering
    pub rating: f64,
}

impl Product {
    /// Creates a product without a description.
    pub fn new(
        id: impl Into<ProductId>,
        product_name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            description: None,
            category: category.into(),
            price,
            rating,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the description, or an empty string when missing.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Returns the fields searched by keyword matching.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.product_name, self.description_or_empty(), &self.category]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_json() {
        let json = r#"{
            "id": 7,
            "product_name": "Red T-Shirt",
            "description": "Soft cotton tee",
            "category": " Clothing ",
            "price": 499.0,
            "rating": 4.5
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Numeric(7));
        assert_eq!(product.product_name, "Red T-Shirt");
        assert_eq!(product.description_or_empty(), "Soft cotton tee");
        // Category is kept verbatim; only enumeration trims
        assert_eq!(product.category, " Clothing ");
        assert_eq!(product.price, 499.0);
        assert_eq!(product.rating, 4.5);
    }

    #[test]
    fn test_missing_description() {
        let json = r#"{"id": "A1", "product_name": "Mug", "category": "Kitchen",
                       "price": 120, "rating": 3.9}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Text("A1".to_string()));
        assert!(product.description.is_none());
        assert_eq!(product.description_or_empty(), "");
    }

    #[test]
    fn test_negative_and_float_ids() {
        let json = r#"{"id": -3, "product_name": "Mug", "category": "Kitchen",
                       "price": 120, "rating": 3.9}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Signed(-3));
        assert_eq!(product.id.to_string(), "-3");

        let json = r#"{"id": 1.5, "product_name": "Mug", "category": "Kitchen",
                       "price": 120, "rating": 3.9}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Float(1.5));
        assert_eq!(product.id.to_string(), "1.5");
    }

    #[test]
    fn test_null_description() {
        let json = r#"{"id": 1, "product_name": "Mug", "description": null,
                       "category": "Kitchen", "price": 120, "rating": 3.9}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description_or_empty(), "");
    }

    #[test]
    fn test_searchable_fields() {
        let product =
            Product::new(1, "Desk Lamp", "Home", 900.0, 4.1).with_description("LED reading light");
        assert_eq!(product.searchable_fields(), ["Desk Lamp", "LED reading light", "Home"]);

        let product = Product::new(2, "Desk Lamp", "Home", 900.0, 4.1);
        assert_eq!(product.searchable_fields(), ["Desk Lamp", "", "Home"]);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::from(42).to_string(), "42");
        assert_eq!(ProductId::from("SKU-9").to_string(), "SKU-9");
    }
}
