//! Errors raised by the input normalizer.

use crate::dataset::DatasetError;
use crate::run_date::RunDateError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("cannot derive run date for {filename:?}: {source}")]
    RunDate {
        filename: String,
        #[source]
        source: RunDateError,
    },
    #[error("dataset from {0:?} has no time variable")]
    MissingTimeAxis(String),
}
