//! Model run date: the calendar day whose 00Z cycle a recipe pulls from.
//!
//! The Datamart keeps only about two days of RIOPS output, so the default run
//! date is yesterday (UTC). It is computed once per process and passed to both
//! the URL builder and the normalizer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const COMPACT_FORMAT: &str = "%Y%m%d";
const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RunDateError {
    #[error("file name {0:?} is too short to carry a YYYYMMDD run date")]
    TooShort(String),
    #[error("{input:?} is not a YYYYMMDD date: {reason}")]
    Invalid { input: String, reason: String },
}

/// A forecast run date (midnight UTC implied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RunDate(NaiveDate);

impl RunDate {
    pub fn new(date: NaiveDate) -> Self {
        RunDate(date)
    }

    /// The UTC day before `now`, time of day dropped.
    pub fn as_of(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        RunDate(today.pred_opt().unwrap_or(today))
    }

    pub fn yesterday_utc() -> Self {
        Self::as_of(Utc::now())
    }

    /// Run date from the first 8 characters of the basename of `filename`.
    ///
    /// Works for local paths and for URLs, since both use `/` separators.
    pub fn from_filename(filename: &str) -> Result<Self, RunDateError> {
        // Text after the last separator; a trailing `/` leaves an empty basename.
        let base = filename.rsplit('/').next().unwrap_or(filename);
        let prefix: String = base.chars().take(8).collect();
        if prefix.chars().count() < 8 {
            return Err(RunDateError::TooShort(base.to_string()));
        }
        prefix.parse()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `YYYYMMDD`, as used in Datamart file names.
    pub fn yyyymmdd(&self) -> String {
        self.0.format(COMPACT_FORMAT).to_string()
    }

    /// `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// CF time units anchored at this run's midnight.
    pub fn time_units(&self) -> String {
        format!("hours since {} 00:00:00", self.iso_date())
    }
}

impl FromStr for RunDate {
    type Err = RunDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RunDateError::Invalid {
                input: s.to_string(),
                reason: "expected 8 digits".to_string(),
            });
        }
        NaiveDate::parse_from_str(s, COMPACT_FORMAT)
            .map(RunDate)
            .map_err(|e| RunDateError::Invalid {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for RunDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(COMPACT_FORMAT))
    }
}

impl TryFrom<String> for RunDate {
    type Error = RunDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RunDate> for String {
    fn from(value: RunDate) -> Self {
        value.to_string()
    }
}

/// Where the normalizer takes the run date from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunDateSource {
    /// The single run date computed for this execution.
    #[default]
    Shared,
    /// The first 8 characters of each input's file name.
    Filename,
}
