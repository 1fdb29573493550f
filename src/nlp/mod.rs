//! Natural-language query delegation to an external search service.

pub mod client;
pub mod models;

use crate::state::FilterInputs;
use tracing::{debug, warn};

pub use client::{NlpClient, NlpError, NlpSearch, UNKNOWN_SERVER_ERROR};
pub use models::{NlpErrorBody, NlpFilters, NlpRequest, PriceValue};

/// Result of handing a free-text query to the search service.
#[derive(Debug, Clone, PartialEq)]
pub enum NlpOutcome {
    /// Query was blank; nothing was sent
    Skipped,
    /// Inputs were replaced with these filters
    Applied(NlpFilters),
    /// Inputs were left as they were; carries the user-facing notification
    Failed(String),
}

impl NlpOutcome {
    /// Returns the failure notification, if any.
    pub fn notification(&self) -> Option<&str> {
        match self {
            NlpOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Interprets `query` through `service` and applies the result to `inputs`.
///
/// On failure `inputs` is not modified.
pub async fn delegate(
    service: &impl NlpSearch,
    inputs: &mut FilterInputs,
    query: &str,
) -> NlpOutcome {
    if query.trim().is_empty() {
        debug!("Blank query, skipping search service");
        return NlpOutcome::Skipped;
    }

    match service.interpret(query).await {
        Ok(filters) => {
            inputs.apply_nlp(&filters);
            debug!("Applied interpreted filters: {:?}", inputs);
            NlpOutcome::Applied(filters)
        }
        Err(e) => {
            warn!("Query interpretation failed: {}", e);
            NlpOutcome::Failed(format!("NLP Search failed: {}", e))
        }
    }
}
