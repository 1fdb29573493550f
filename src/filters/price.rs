//! Maximum price filter.

use super::Filter;
use crate::catalog::Product;

/// Parses user-entered max price text; blank or malformed input means unbounded.
pub fn parse_max_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| !p.is_nan())
}

/// Filters products priced at or below an inclusive maximum.
pub struct PriceFilter {
    max: Option<f64>,
}

impl PriceFilter {
    /// Creates a new price filter with an optional upper bound.
    pub fn new(max: Option<f64>) -> Self {
        Self { max }
    }

    /// Creates a filter with a maximum price.
    pub fn max(price: f64) -> Self {
        Self { max: Some(price) }
    }

    /// Creates a filter from raw user input.
    pub fn parse(raw: &str) -> Self {
        Self::new(parse_max_price(raw))
    }
}

impl Filter for PriceFilter {
    fn matches(&self, product: &Product) -> bool {
        match self.max {
            Some(max) => product.price <= max,
            None => true,
        }
    }

    fn description(&self) -> String {
        match self.max {
            Some(max) => format!("Price: <= {:.2}", max),
            None => "Price: any".to_string(),
        }
    }
}
