//! Filter inputs as the user entered them.

use crate::catalog::ALL_CATEGORIES;
use crate::config::Config;
use crate::filters::FilterCriteria;
use crate::nlp::NlpFilters;

/// Raw values behind the category selector, price box, and keyword box.
///
/// Criteria are derived from these on every filtering pass, so nothing
/// parsed is cached between edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInputs {
    pub category: String,
    pub max_price: String,
    pub filter_term: String,
}

impl Default for FilterInputs {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            max_price: String::new(),
            filter_term: String::new(),
        }
    }
}

impl FilterInputs {
    /// Seeds inputs from the configured defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            category: config.category.clone(),
            max_price: config.max_price.clone(),
            filter_term: config.filter_term.clone(),
        }
    }

    /// Derives the criteria for the current inputs.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_input(&self.category, &self.max_price, &self.filter_term)
    }

    /// Replaces every input with the interpreted filters.
    ///
    /// Fields the service left out are reset to their defaults rather than
    /// kept from the previous inputs.
    pub fn apply_nlp(&mut self, filters: &NlpFilters) {
        self.category = filters.category_or_all();
        self.max_price = filters.max_price_input();
        self.filter_term = filters.filter_term_input();
    }
}
