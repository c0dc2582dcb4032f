//! Source URL construction for RIOPS polar-stereographic 2D output.
//!
//! Builds Datamart URLs of the form
//! `{base}/2d/{cc}/{fhhh}/{yyyymmdd}T{cc}Z_MSC_RIOPS_{VAR}_{LEVEL}_PS5km_P{fhhh}.nc`.
//! Construction is pure string formatting: nothing here touches the network.

mod cycle;
mod file_name;

pub use cycle::ForecastCycle;
pub use file_name::{file_name_from_url, parse_file_name, parse_url, RiopsFileName};

use crate::run_date::RunDate;
use crate::variable::vertical_level_for;

/// Datamart root for RIOPS polar-stereographic forecasts.
pub const RIOPS_PS_BASE_URL: &str =
    "https://dd.weather.gc.ca/model_riops/netcdf/forecast/polar_stereographic";

/// Grid tag of the 5 km polar-stereographic product.
pub const GRID_TAG: &str = "PS5km";

#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error("invalid base URL {base:?}: {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL {0:?} must use http or https")]
    UnsupportedScheme(String),
    #[error("{name:?} is not a RIOPS file name: {reason}")]
    BadFileName { name: String, reason: String },
}

/// Maps (variable, forecast hour) to a download URL for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    run_date: RunDate,
    cycle: ForecastCycle,
}

impl UrlBuilder {
    /// Builder for the public Datamart at the 00Z cycle.
    pub fn new(run_date: RunDate) -> Self {
        Self {
            base_url: RIOPS_PS_BASE_URL.to_string(),
            run_date,
            cycle: ForecastCycle::Z00,
        }
    }

    /// Builder with a custom base (mirror or test server) and cycle.
    pub fn with_base(
        base_url: &str,
        run_date: RunDate,
        cycle: ForecastCycle,
    ) -> Result<Self, UrlError> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed = url::Url::parse(trimmed).map_err(|source| UrlError::InvalidBase {
            base: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(UrlError::UnsupportedScheme(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            run_date,
            cycle,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn run_date(&self) -> RunDate {
        self.run_date
    }

    pub fn cycle(&self) -> ForecastCycle {
        self.cycle
    }

    /// Final path segment for `variable` at forecast hour `time`.
    pub fn file_name(&self, variable: &str, time: u32) -> String {
        let fh = format!("{time:03}");
        format!(
            "{date}T{cc}Z_MSC_RIOPS_{variable}_{level}_{GRID_TAG}_P{fh}.nc",
            date = self.run_date.yyyymmdd(),
            cc = self.cycle,
            level = vertical_level_for(variable),
        )
    }

    /// Full download URL. Unknown variables get the surface level tag.
    pub fn make_url(&self, variable: &str, time: u32) -> String {
        format!(
            "{base}/2d/{cc}/{time:03}/{name}",
            base = self.base_url,
            cc = self.cycle,
            name = self.file_name(variable, time),
        )
    }
}
