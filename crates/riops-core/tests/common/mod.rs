//! Shared fixtures for integration tests.

use serde_json::{json, Value};

/// Header of a RIOPS polar-stereographic 2D file as the framework would hand it over.
pub fn riops_header_json(variable: &str) -> Value {
    json!({
        "dims": {"time": 1, "xc": 450, "yc": 410},
        "variables": {
            "time": {
                "dims": ["time"],
                "coordinate": true,
                "attrs": {"standard_name": "time"},
                "encoding": {"units": "days since 1970-01-01", "calendar": "gregorian", "dtype": "float64"}
            },
            "xc": {"dims": ["xc"], "coordinate": true},
            "yc": {"dims": ["yc"], "coordinate": true},
            "polar_stereographic": {
                "dims": [],
                "attrs": {"grid_mapping_name": "polar_stereographic", "straight_vertical_longitude_from_pole": -100.0}
            },
            (variable.to_lowercase()): {
                "dims": ["time", "yc", "xc"],
                "attrs": {"grid_mapping": "polar_stereographic"}
            }
        },
        "attrs": {"institution": "CMC"}
    })
}

pub const CONFIG_TOML: &str = r#"
base_url = "https://dd.weather.gc.ca/model_riops/netcdf/forecast/polar_stereographic/"
cycle = "00"
variables = ["VOTEMPER", "VOSALINE", "VOZOCRTX", "VOMECRTY"]
forecast_hours = 84
run_date = "20240310"

[target_chunks]
time = 1
xc = 450
yc = 410
"#;
