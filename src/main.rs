//! catalog-search - Product catalog filtering CLI

use anyhow::Result;
use catalog_search::catalog::Catalog;
use catalog_search::commands::{AskCommand, ListCommand};
use catalog_search::config::{Config, OutputFormat};
use catalog_search::format::Formatter;
use catalog_search::state::FilterInputs;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "catalog-search",
    version,
    about = "Filter and rank a product catalog",
    long_about = "Filters a product catalog by category, price, and whole-word keywords, ranked by rating. \
                  Free-text queries can be interpreted by a natural-language search service."
)]
struct Cli {
    /// Path to the product catalog JSON file
    #[arg(long, global = true, env = "CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Filter inputs shared by listing commands.
#[derive(Args)]
struct FilterArgs {
    /// Category to show, or "All"
    #[arg(long)]
    category: Option<String>,

    /// Maximum price (blank or invalid means no limit)
    #[arg(long)]
    max_price: Option<String>,

    /// Whitespace-separated keywords; all must match as whole words
    #[arg(short, long)]
    keyword: Option<String>,
}

impl FilterArgs {
    fn into_inputs(self, config: &Config) -> FilterInputs {
        let mut inputs = FilterInputs::from_config(config);

        if let Some(category) = self.category {
            inputs.category = category;
        }
        if let Some(max_price) = self.max_price {
            inputs.max_price = max_price;
        }
        if let Some(keyword) = self.keyword {
            inputs.filter_term = keyword;
        }

        inputs
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching the filters, best rated first
    #[command(alias = "l")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the catalog's categories
    Categories,

    /// Interpret a free-text query and list the matching products
    #[command(alias = "a")]
    Ask {
        /// Free-text query, e.g. "white bags under 5000"
        query: String,

        /// Search service endpoint
        #[arg(long, env = "CATALOG_NLP_ENDPOINT")]
        endpoint: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::List { filters } => {
            let inputs = filters.into_inputs(&config);
            let output = ListCommand::new(config).execute(&inputs)?;
            println!("{}", output);
        }

        Commands::Categories => {
            let catalog = Catalog::load(&config.catalog_path)?;
            let formatter = Formatter::from_config(&config);
            println!("{}", formatter.format_categories(&catalog.categories()));
        }

        Commands::Ask { query, endpoint, filters } => {
            if let Some(endpoint) = endpoint {
                config.nlp_endpoint = endpoint;
            }

            let inputs = filters.into_inputs(&config);
            let output = AskCommand::new(config).execute(&query, inputs).await?;

            if let Some(notification) = output.notification {
                eprintln!("{}", notification);
            }
            println!("{}", output.listing);
        }
    }

    Ok(())
}
