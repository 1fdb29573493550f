//! Request and response payloads for the natural-language search service.

use crate::catalog::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};

/// Body sent to the search service.
#[derive(Debug, Clone, Serialize)]
pub struct NlpRequest<'a> {
    pub query: &'a str,
}

/// Max price as returned by the service, which may send `""` instead of a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Returns the value as max-price input text.
    pub fn to_input(&self) -> String {
        match self {
            PriceValue::Number(n) => n.to_string(),
            PriceValue::Text(s) => s.clone(),
        }
    }
}

/// Structured filters interpreted from a free-text query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NlpFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub max_price: Option<PriceValue>,
    #[serde(default)]
    pub filter_term: Option<String>,
}

impl NlpFilters {
    /// Category to select; missing or blank falls back to `"All"`.
    pub fn category_or_all(&self) -> String {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => ALL_CATEGORIES.to_string(),
        }
    }

    /// Max price input text; missing means unbounded (empty).
    pub fn max_price_input(&self) -> String {
        self.max_price.as_ref().map(PriceValue::to_input).unwrap_or_default()
    }

    /// Keyword text, trimmed and lower-cased; missing means empty.
    pub fn filter_term_input(&self) -> String {
        self.filter_term.as_deref().map(|t| t.trim().to_lowercase()).unwrap_or_default()
    }
}

/// Error body returned with a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct NlpErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
