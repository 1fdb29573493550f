//! Product catalog: data models, loading, and category enumeration.

pub mod models;
pub mod store;

pub use models::{Product, ProductId};
pub use store::{list_categories, Catalog, ALL_CATEGORIES};
