//! CLI command implementations.

pub mod ask;
pub mod list;

pub use ask::{AskCommand, AskOutput};
pub use list::ListCommand;
