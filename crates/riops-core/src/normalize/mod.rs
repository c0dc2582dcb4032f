//! Post-read hook applied to every opened input file.
//!
//! Drops the grid-mapping variable and re-anchors the time encoding at the
//! model run's midnight so that every file of a run shares one time origin.

mod error;

pub use error::NormalizeError;

use crate::dataset::{Dataset, TimeEncoding};
use crate::run_date::{RunDate, RunDateSource};
use serde::{Deserialize, Serialize};

/// Grid-mapping variable carried by each polar-stereographic file.
pub const PROJECTION_VARIABLE: &str = "polar_stereographic";
pub const TIME_VARIABLE: &str = "time";
pub const CALENDAR: &str = "proleptic_gregorian";

/// What to do when an input has no projection variable to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingProjection {
    /// Fail the input.
    #[default]
    Strict,
    /// Log and continue.
    Tolerant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputNormalizer {
    run_date: RunDate,
    run_date_source: RunDateSource,
    missing_projection: MissingProjection,
}

impl InputNormalizer {
    /// Normalizer using the shared run date and strict projection removal.
    pub fn new(run_date: RunDate) -> Self {
        Self {
            run_date,
            run_date_source: RunDateSource::Shared,
            missing_projection: MissingProjection::Strict,
        }
    }

    pub fn with_run_date_source(mut self, source: RunDateSource) -> Self {
        self.run_date_source = source;
        self
    }

    pub fn with_missing_projection(mut self, policy: MissingProjection) -> Self {
        self.missing_projection = policy;
        self
    }

    pub fn shared_run_date(&self) -> RunDate {
        self.run_date
    }

    pub fn run_date_source(&self) -> RunDateSource {
        self.run_date_source
    }

    pub fn missing_projection(&self) -> MissingProjection {
        self.missing_projection
    }

    /// Run date that anchors the time axis of `filename`.
    pub fn run_date_for(&self, filename: &str) -> Result<RunDate, NormalizeError> {
        match self.run_date_source {
            RunDateSource::Shared => Ok(self.run_date),
            RunDateSource::Filename => {
                RunDate::from_filename(filename).map_err(|source| NormalizeError::RunDate {
                    filename: filename.to_string(),
                    source,
                })
            }
        }
    }

    /// Time encoding written for inputs of `run_date`.
    pub fn time_encoding(run_date: RunDate) -> TimeEncoding {
        TimeEncoding {
            units: run_date.time_units(),
            calendar: CALENDAR.to_string(),
        }
    }

    pub fn process_input(
        &self,
        mut ds: Dataset,
        filename: &str,
    ) -> Result<Dataset, NormalizeError> {
        match self.missing_projection {
            MissingProjection::Strict => {
                ds.drop_variable(PROJECTION_VARIABLE)?;
            }
            MissingProjection::Tolerant => {
                if ds.remove_variable(PROJECTION_VARIABLE).is_none() {
                    tracing::debug!(filename, "no {} variable to drop", PROJECTION_VARIABLE);
                }
            }
        }

        let run_date = self.run_date_for(filename)?;
        let time = ds
            .variable_mut(TIME_VARIABLE)
            .ok_or_else(|| NormalizeError::MissingTimeAxis(filename.to_string()))?;
        time.encoding = Self::time_encoding(run_date).into();

        tracing::debug!(filename, run_date = %run_date, "normalized input");
        Ok(ds)
    }
}
