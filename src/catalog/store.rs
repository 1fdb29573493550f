//! In-memory product catalog loaded once from a JSON file.

use super::models::Product;
use crate::filters::{filter_and_rank, FilterCriteria};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Category sentinel that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Immutable product collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from products already in memory.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads a catalog from a JSON array of products.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let catalog = Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        info!("Loaded {} products", catalog.len());
        Ok(catalog)
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::from_products(products))
    }

    /// Returns all products in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the category choices for this catalog.
    pub fn categories(&self) -> Vec<String> {
        list_categories(&self.products)
    }

    /// Returns the products matching `criteria`, best rated first.
    pub fn filter_and_rank(&self, criteria: &FilterCriteria) -> Vec<Product> {
        filter_and_rank(&self.products, criteria)
    }
}

/// Lists `"All"` followed by each distinct trimmed category in first-seen order.
pub fn list_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for product in products {
        let category = product.category.trim();
        if seen.insert(category) {
            categories.push(category.to_string());
        }
    }

    categories
}
