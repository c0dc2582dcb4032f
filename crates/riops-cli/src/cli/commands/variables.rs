//! `riops variables` – list variable codes.

use anyhow::Result;
use riops_core::config::RecipeConfig;
use riops_core::variable::VARIABLES;

pub fn run_variables(cfg: &RecipeConfig) -> Result<()> {
    println!("{:<16} {:<10} {:<8} {}", "CODE", "LEVEL", "MERGED", "DESCRIPTION");
    for v in VARIABLES {
        let merged = cfg.variables.iter().any(|c| c == v.code);
        println!(
            "{:<16} {:<10} {:<8} {}",
            v.code,
            v.level.as_tag(),
            if merged { "yes" } else { "no" },
            v.description
        );
    }
    Ok(())
}
