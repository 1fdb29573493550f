//! Exact category filter.

use super::Filter;
use crate::catalog::{Product, ALL_CATEGORIES};

/// Filters products by exact category, or passes everything for `"All"`.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    /// Creates a filter for the given category.
    pub fn new(category: impl Into<String>) -> Self {
        Self { category: category.into() }
    }

    /// Creates a filter that accepts every category.
    pub fn all() -> Self {
        Self::new(ALL_CATEGORIES)
    }

    /// Returns true if this filter accepts every category.
    pub fn is_all(&self) -> bool {
        self.category == ALL_CATEGORIES
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl Filter for CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        self.is_all() || product.category == self.category
    }

    fn description(&self) -> String {
        format!("Category: {}", self.category)
    }
}
