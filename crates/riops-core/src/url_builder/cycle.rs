//! RIOPS forecast cycles (model start hours).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RIOPS runs every 6 hours, at 00, 06, 12 and 18 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForecastCycle {
    #[default]
    #[serde(rename = "00")]
    Z00,
    #[serde(rename = "06")]
    Z06,
    #[serde(rename = "12")]
    Z12,
    #[serde(rename = "18")]
    Z18,
}

impl ForecastCycle {
    /// Two-digit hour as it appears in directory and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            ForecastCycle::Z00 => "00",
            ForecastCycle::Z06 => "06",
            ForecastCycle::Z12 => "12",
            ForecastCycle::Z18 => "18",
        }
    }
}

impl fmt::Display for ForecastCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches(['z', 'Z']) {
            "00" | "0" => Ok(ForecastCycle::Z00),
            "06" | "6" => Ok(ForecastCycle::Z06),
            "12" => Ok(ForecastCycle::Z12),
            "18" => Ok(ForecastCycle::Z18),
            other => Err(format!(
                "unknown forecast cycle {other:?} (expected 00, 06, 12 or 18)"
            )),
        }
    }
}
