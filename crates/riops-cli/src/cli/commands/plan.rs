//! `riops plan` – print the recipe plan as JSON.

use anyhow::{Context, Result};
use riops_core::Recipe;

pub fn run_plan(recipe: &Recipe) -> Result<()> {
    let json = serde_json::to_string_pretty(&recipe.plan()).context("failed to serialize plan")?;
    println!("{json}");
    Ok(())
}
