//! `riops normalize` – run the input hook over a dataset header.

use anyhow::{Context, Result};
use riops_core::{Dataset, Recipe};
use std::fs;
use std::path::Path;

pub fn run_normalize(recipe: &Recipe, header: &Path, filename: &str) -> Result<()> {
    let data = fs::read_to_string(header)
        .with_context(|| format!("failed to read {}", header.display()))?;
    let ds: Dataset = serde_json::from_str(&data)
        .with_context(|| format!("{} is not a dataset header", header.display()))?;
    let out = recipe
        .process_input(ds, filename)
        .with_context(|| format!("failed to normalize {}", filename))?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
