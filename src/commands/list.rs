//! List command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::Formatter;
use crate::state::FilterInputs;
use anyhow::Result;
use tracing::info;

/// Filters the catalog and prints the ranked products.
pub struct ListCommand {
    config: Config,
}

impl ListCommand {
    /// Creates a new list command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configured catalog and returns formatted output.
    pub fn execute(&self, inputs: &FilterInputs) -> Result<String> {
        let catalog = Catalog::load(&self.config.catalog_path)?;
        Ok(self.execute_with_catalog(&catalog, inputs))
    }

    /// Filters a provided catalog (for testing).
    pub fn execute_with_catalog(&self, catalog: &Catalog, inputs: &FilterInputs) -> String {
        let products = catalog.filter_and_rank(&inputs.criteria());
        info!("Found {} products matching criteria", products.len());

        Formatter::from_config(&self.config).format_products(&products)
    }
}
