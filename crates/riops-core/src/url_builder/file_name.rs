//! Decomposing RIOPS Datamart file names.
//!
//! `{yyyymmdd}T{cc}Z_MSC_RIOPS_{variable}_{level}_PS5km_P{fhhh}.nc`

use super::{ForecastCycle, UrlError, GRID_TAG};
use crate::run_date::RunDate;

/// Fields recovered from a RIOPS file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiopsFileName {
    pub run_date: RunDate,
    pub cycle: ForecastCycle,
    pub variable: String,
    /// Raw level tag (e.g. `DBS-0.5m`); kept as text so unknown levels still parse.
    pub level: String,
    pub forecast_hour: u32,
}

fn bad(name: &str, reason: impl Into<String>) -> UrlError {
    UrlError::BadFileName {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Parses a bare RIOPS file name (no directories).
pub fn parse_file_name(name: &str) -> Result<RiopsFileName, UrlError> {
    let stem = name
        .strip_suffix(".nc")
        .ok_or_else(|| bad(name, "missing .nc extension"))?;
    let parts: Vec<&str> = stem.split('_').collect();
    let [stamp, "MSC", "RIOPS", variable, level, grid, hour] = parts.as_slice() else {
        return Err(bad(
            name,
            "expected {date}T{cycle}Z_MSC_RIOPS_{var}_{level}_{grid}_P{hour}",
        ));
    };
    if *grid != GRID_TAG {
        return Err(bad(name, format!("unexpected grid {grid:?}")));
    }
    if variable.is_empty() || level.is_empty() {
        return Err(bad(name, "empty variable or level"));
    }

    let (date_part, cycle_part) = stamp
        .split_once('T')
        .ok_or_else(|| bad(name, "missing T between date and cycle"))?;
    let run_date: RunDate = date_part.parse().map_err(|e| bad(name, format!("{e}")))?;
    let cycle_part = cycle_part
        .strip_suffix('Z')
        .ok_or_else(|| bad(name, "cycle must end in Z"))?;
    let cycle: ForecastCycle = cycle_part.parse().map_err(|e: String| bad(name, e))?;

    let digits = hour
        .strip_prefix('P')
        .filter(|d| d.len() >= 3 && d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| bad(name, "forecast hour must be P followed by 3+ digits"))?;
    let forecast_hour: u32 = digits.parse().map_err(|_| bad(name, "forecast hour overflow"))?;

    Ok(RiopsFileName {
        run_date,
        cycle,
        variable: variable.to_string(),
        level: level.to_string(),
        forecast_hour,
    })
}

/// Extracts the last path segment from a URL.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn file_name_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Parses the file name at the end of a full Datamart URL.
pub fn parse_url(url: &str) -> Result<RiopsFileName, UrlError> {
    let name = file_name_from_url(url).ok_or_else(|| bad(url, "URL has no file name"))?;
    parse_file_name(&name)
}
