//! `riops config` – show config path and values.

use anyhow::Result;
use riops_core::config::RecipeConfig;
use std::path::Path;

pub fn run_config(path: &Path, cfg: &RecipeConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
