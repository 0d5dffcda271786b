//! CLI command handlers. Each command is in its own file.

mod completions;
mod config;
mod dedup;
mod normalize;
mod query;

pub use completions::{run_completions, run_manpage};
pub use config::run_config;
pub use dedup::run_dedup;
pub use normalize::run_normalize;
pub use query::{run_query_decode, run_query_encode};
