//! Product filtering system with composable filters.

pub mod category;
pub mod keyword;
pub mod price;

use crate::catalog::{Product, ALL_CATEGORIES};
use std::cmp::Ordering;
use tracing::debug;

pub use category::CategoryFilter;
pub use keyword::{tokenize, KeywordFilter};
pub use price::{parse_max_price, PriceFilter};

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// Category, price bound, and keyword terms that select products.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// `"All"` or an exact category value
    pub category: String,
    /// Inclusive upper bound; `None` means unbounded
    pub max_price: Option<f64>,
    /// Lowercase keyword terms, all of which must match
    pub keyword_terms: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self { category: ALL_CATEGORIES.to_string(), max_price: None, keyword_terms: Vec::new() }
    }
}

impl FilterCriteria {
    /// Builds criteria from raw user input.
    pub fn from_input(category: &str, max_price: &str, keywords: &str) -> Self {
        Self {
            category: category.to_string(),
            max_price: parse_max_price(max_price),
            keyword_terms: tokenize(keywords),
        }
    }
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Builds the chain for a set of criteria.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        FilterChainBuilder::new()
            .category(&criteria.category)
            .max_price(criteria.max_price)
            .keywords(criteria.keyword_terms.clone())
            .build()
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a product passes all filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Returns copies of the products that pass, in input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from criteria.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a category filter unless the category is `"All"`.
    pub fn category(mut self, category: &str) -> Self {
        let filter = CategoryFilter::new(category);
        if !filter.is_all() {
            self.chain.add(filter);
        }
        self
    }

    /// Adds a maximum price filter.
    pub fn max_price(mut self, max: Option<f64>) -> Self {
        if max.is_some() {
            self.chain.add(PriceFilter::new(max));
        }
        self
    }

    /// Adds required keywords filter.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            self.chain.add(KeywordFilter::new(keywords));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the products satisfying `criteria`, highest rating first.
///
/// Equal ratings keep their input order. `products` is left untouched.
pub fn filter_and_rank(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let chain = FilterChain::from_criteria(criteria);

    if !chain.is_empty() {
        debug!("Active filters: {}", chain.descriptions().join(", "));
    }

    let mut matched = chain.apply(products);
    matched.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

    debug!("{} of {} products match", matched.len(), products.len());
    matched
}
