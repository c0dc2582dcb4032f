//! `riops url` / `riops urls` – print source URLs.

use anyhow::Result;
use riops_core::variable::lookup;
use riops_core::Recipe;

pub fn run_url(recipe: &Recipe, variable: &str, hour: u32) -> Result<()> {
    if lookup(variable).is_none() {
        tracing::warn!(variable, "unknown variable code; using surface level");
    }
    println!("{}", recipe.pattern().url_for(variable, hour));
    Ok(())
}

pub fn run_urls(recipe: &Recipe) -> Result<()> {
    for input in recipe.pattern().inputs() {
        println!("{}", input.url);
    }
    tracing::info!("listed {} url(s)", recipe.pattern().len());
    Ok(())
}
