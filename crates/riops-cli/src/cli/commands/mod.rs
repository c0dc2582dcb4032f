//! CLI command handlers, one file per command.

mod config;
mod normalize;
mod plan;
mod url;
mod variables;

pub use config::run_config;
pub use normalize::run_normalize;
pub use plan::run_plan;
pub use url::{run_url, run_urls};
pub use variables::run_variables;
