//! RIOPS 2D field codes and their vertical levels.
//!
//! The level is resolved from a closed table; codes missing from the table
//! resolve to the surface level.

use serde::{Deserialize, Serialize};
use std::fmt;
use VerticalLevel::{DepthBelowSurfaceHalfMetre as Dbs, Surface as Sfc};

/// Vertical level tag embedded in RIOPS file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalLevel {
    /// Depth below surface, 0.5 m.
    #[serde(rename = "DBS-0.5m")]
    DepthBelowSurfaceHalfMetre,
    /// Surface.
    #[serde(rename = "SFC")]
    Surface,
}

impl VerticalLevel {
    pub fn as_tag(self) -> &'static str {
        match self {
            VerticalLevel::DepthBelowSurfaceHalfMetre => "DBS-0.5m",
            VerticalLevel::Surface => "SFC",
        }
    }
}

impl fmt::Display for VerticalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One row of the variable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableSpec {
    pub code: &'static str,
    pub description: &'static str,
    pub level: VerticalLevel,
    /// Part of the default merge axis.
    pub active: bool,
}

const fn row(
    code: &'static str,
    description: &'static str,
    level: VerticalLevel,
    active: bool,
) -> VariableSpec {
    VariableSpec {
        code,
        description,
        level,
        active,
    }
}

/// Every known 2D field, in merge-axis order.
pub const VARIABLES: &[VariableSpec] = &[
    row("VOTEMPER", "Potential temperature of sea water", Dbs, true),
    row("VOSALINE", "Sea water salinity", Dbs, true),
    row("VOZOCRTX", "X-component of water velocity", Dbs, true),
    row("VOMECRTY", "Y-component of water velocity", Dbs, true),
    row("IICECONC", "Sea ice fraction", Sfc, false),
    row("IICEVOL", "Volume of sea ice per unit grid cell area", Sfc, false),
    row("ISNOWVOL", "Volume of snow on sea ice per unit grid cell area", Sfc, false),
    row("IICESTRENGTH", "Vertically integrated compressive ice strength", Sfc, false),
    row("IICEPRESSURE", "Vertically integrated ice internal pressure", Sfc, false),
    row("IICESURFTEMP", "Surface temperature of sea ice/snow", Sfc, false),
    row("IICEDIVERGENCE", "Sea ice divergence", Sfc, false),
    row("IICESHEAR", "Sea ice shear", Sfc, false),
    row("ITZOCRTX", "X-component of sea ice velocity", Sfc, false),
    row("ITMERCTY", "Y-component of sea ice velocity", Sfc, false),
    row("SOKARAML", "Mixed layer depth based on a density criterion", Sfc, false),
    row("SOMIXHGT", "Turbocline depth", Sfc, false),
    row("SOSSHEIG", "Sea surface height", Sfc, false),
];

/// Level used for codes that are not in [`VARIABLES`].
pub const DEFAULT_LEVEL: VerticalLevel = VerticalLevel::Surface;

pub fn lookup(code: &str) -> Option<&'static VariableSpec> {
    VARIABLES.iter().find(|v| v.code == code)
}

/// Vertical level for a variable code. Unknown codes get [`DEFAULT_LEVEL`].
pub fn vertical_level_for(code: &str) -> VerticalLevel {
    lookup(code).map(|v| v.level).unwrap_or(DEFAULT_LEVEL)
}

/// Codes of the default merge axis.
pub fn active_variables() -> Vec<String> {
    VARIABLES
        .iter()
        .filter(|v| v.active)
        .map(|v| v.code.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_variables_are_the_four_ocean_fields() {
        assert_eq!(
            active_variables(),
            vec!["VOTEMPER", "VOSALINE", "VOZOCRTX", "VOMECRTY"]
        );
    }

    #[test]
    fn ocean_fields_sit_half_a_metre_down() {
        for code in ["VOTEMPER", "VOSALINE", "VOZOCRTX", "VOMECRTY"] {
            assert_eq!(vertical_level_for(code).as_tag(), "DBS-0.5m", "{code}");
        }
    }

    #[test]
    fn ice_and_surface_fields_use_sfc() {
        assert_eq!(vertical_level_for("IICECONC"), VerticalLevel::Surface);
        assert_eq!(vertical_level_for("SOSSHEIG"), VerticalLevel::Surface);
    }

    #[test]
    fn unknown_code_falls_back_to_surface() {
        assert_eq!(vertical_level_for("NOTAVAR"), DEFAULT_LEVEL);
        assert_eq!(vertical_level_for(""), VerticalLevel::Surface);
        // Lookup is case sensitive, like the file names.
        assert_eq!(vertical_level_for("votemper"), VerticalLevel::Surface);
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in VARIABLES.iter().enumerate() {
            assert!(
                VARIABLES[i + 1..].iter().all(|b| b.code != a.code),
                "duplicate {}",
                a.code
            );
        }
    }

    #[test]
    fn level_tags_match_serde_names() {
        for level in [Dbs, Sfc] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_tag()));
        }
        assert_eq!(Dbs.to_string(), "DBS-0.5m");
        assert_eq!(Sfc.to_string(), "SFC");
    }
}
