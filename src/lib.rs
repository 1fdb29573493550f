//! catalog-search - Product catalog filtering CLI
//!
//! Filters a static product catalog by category, price, and whole-word
//! keywords, ranks matches by rating, and can hand free-text queries to a
//! natural-language search service that returns structured filters.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod filters;
pub mod format;
pub mod nlp;
pub mod state;

pub use catalog::{list_categories, Catalog, Product, ProductId};
pub use config::Config;
pub use filters::{filter_and_rank, FilterCriteria};
pub use state::FilterInputs;
