pub mod config;
pub mod dataset;
pub mod logging;
pub mod normalize;
pub mod pattern;
pub mod recipe;
pub mod run_date;
pub mod url_builder;
pub mod variable;

pub use dataset::Dataset;
pub use normalize::InputNormalizer;
pub use recipe::Recipe;
pub use run_date::RunDate;
pub use url_builder::UrlBuilder;
