//! Natural-language query command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::Formatter;
use crate::nlp::{self, NlpClient, NlpOutcome, NlpSearch};
use crate::state::FilterInputs;
use anyhow::{Context, Result};
use tracing::info;

/// Result of an ask run: the listing plus any failure notification.
#[derive(Debug, Clone)]
pub struct AskOutput {
    pub notification: Option<String>,
    pub inputs: FilterInputs,
    pub listing: String,
}

/// Interprets a free-text query, applies it, and lists the catalog.
pub struct AskCommand {
    config: Config,
}

impl AskCommand {
    /// Creates a new ask command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs against the configured catalog and search endpoint.
    pub async fn execute(&self, query: &str, inputs: FilterInputs) -> Result<AskOutput> {
        let catalog = Catalog::load(&self.config.catalog_path)?;
        let client = NlpClient::new(&self.config).context("Failed to create HTTP client")?;

        Ok(self.execute_with_service(&client, &catalog, query, inputs).await)
    }

    /// Runs with a provided service and catalog (for testing).
    pub async fn execute_with_service(
        &self,
        service: &impl NlpSearch,
        catalog: &Catalog,
        query: &str,
        mut inputs: FilterInputs,
    ) -> AskOutput {
        let outcome = nlp::delegate(service, &mut inputs, query).await;
        if matches!(outcome, NlpOutcome::Applied(_)) {
            info!(
                "Filters now: category={}, max_price={:?}, keywords={:?}",
                inputs.category, inputs.max_price, inputs.filter_term
            );
        }

        let products = catalog.filter_and_rank(&inputs.criteria());
        let listing = Formatter::from_config(&self.config).format_products(&products);

        AskOutput { notification: outcome.notification().map(str::to_string), inputs, listing }
    }
}
