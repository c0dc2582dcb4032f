//! CLI for the RIOPS forecast recipe.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use riops_core::config::{self, RecipeConfig};
use riops_core::{Recipe, RunDate};
use std::path::PathBuf;

use commands::{run_config, run_normalize, run_plan, run_url, run_urls, run_variables};

/// Top-level CLI for the RIOPS forecast recipe.
#[derive(Debug, Parser)]
#[command(name = "riops")]
#[command(about = "RIOPS forecast recipe: source URLs, plan and input normalization")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/riops/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Model run date (YYYYMMDD). Defaults to the config's run_date, then yesterday (UTC).
    #[arg(long, global = true, value_name = "YYYYMMDD")]
    pub run_date: Option<RunDate>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the source URL for one variable and forecast hour.
    Url {
        /// Variable code, e.g. VOTEMPER.
        variable: String,
        /// Forecast hour (0-83).
        hour: u32,
    },

    /// Print every source URL of the recipe, variable by variable.
    Urls,

    /// Print the recipe plan (axes, chunks, time encoding, inputs) as JSON.
    Plan,

    /// List known variable codes and their vertical levels.
    Variables,

    /// Normalize a dataset header (JSON) as the recipe's input hook would.
    Normalize {
        /// Path to the dataset header JSON.
        header: PathBuf,
        /// Source file name the header was read from.
        filename: String,
    },

    /// Show the config file path and values, even if they fail validation.
    Config,
}

/// `--run-date`, then the config's pinned `run_date`, then yesterday (UTC).
pub fn resolve_run_date(flag: Option<RunDate>, cfg: &RecipeConfig) -> RunDate {
    flag.unwrap_or_else(|| cfg.resolve_run_date())
}

impl Cli {
    /// Explicit `--config`, or the XDG default (created with defaults on first use).
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => {
                let path = config::config_path()?;
                config::init_if_missing(&path)?;
                Ok(path)
            }
        }
    }

    /// Validated config and the recipe for this invocation's single run date.
    fn recipe(&self) -> Result<Recipe> {
        let cfg = config::load_from_path(&self.config_path()?)?;
        tracing::debug!("loaded config: {:?}", cfg);
        let run_date = resolve_run_date(self.run_date, &cfg);
        let recipe = Recipe::from_config(&cfg, run_date)?;
        tracing::info!(run_date = %run_date, "recipe ready");
        Ok(recipe)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Url { variable, hour } => run_url(&cli.recipe()?, variable, *hour)?,
            CliCommand::Urls => run_urls(&cli.recipe()?)?,
            CliCommand::Plan => run_plan(&cli.recipe()?)?,
            CliCommand::Normalize { header, filename } => {
                run_normalize(&cli.recipe()?, header, filename)?
            }
            CliCommand::Variables => {
                let cfg = config::read_from_path(&cli.config_path()?)?;
                run_variables(&cfg)?
            }
            CliCommand::Config => {
                let path = cli.config_path()?;
                let cfg = config::read_from_path(&path)?;
                if let Err(e) = cfg.validate() {
                    tracing::warn!("config {} is invalid: {}", path.display(), e);
                    eprintln!("warning: {e}");
                }
                run_config(&path, &cfg)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
