use crate::normalize::MissingProjection;
use crate::pattern::FORECAST_HOURS;
use crate::recipe::TargetChunks;
use crate::run_date::{RunDate, RunDateSource};
use crate::url_builder::{ForecastCycle, UrlBuilder, RIOPS_PS_BASE_URL};
use crate::variable::active_variables;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("variables list is empty")]
    NoVariables,
    #[error("forecast_hours must be at least 1")]
    NoForecastHours,
    #[error("target chunk for {0:?} must be at least 1")]
    ZeroChunk(String),
    #[error(transparent)]
    Url(#[from] crate::url_builder::UrlError),
}

/// Recipe configuration loaded from `~/.config/riops/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Datamart root (or a mirror) that hosts the `2d/{cycle}/{hour}/` tree.
    pub base_url: String,
    /// Model cycle to pull: "00", "06", "12" or "18".
    #[serde(default)]
    pub cycle: ForecastCycle,
    /// Merge-axis variable codes, in output order.
    pub variables: Vec<String>,
    /// Number of hourly files per variable, starting at hour 0.
    pub forecast_hours: u32,
    /// "shared" (one run date per execution) or "filename" (parse each input's name).
    #[serde(default)]
    pub run_date_source: RunDateSource,
    /// "strict" fails inputs without a polar_stereographic variable; "tolerant" skips the drop.
    #[serde(default)]
    pub missing_projection: MissingProjection,
    /// Pin the run date (YYYYMMDD). None = yesterday, UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_date: Option<RunDate>,
    /// Chunk length per output dimension. Kept last so it serializes as a trailing table.
    pub target_chunks: TargetChunks,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            base_url: RIOPS_PS_BASE_URL.to_string(),
            cycle: ForecastCycle::Z00,
            variables: active_variables(),
            forecast_hours: FORECAST_HOURS,
            run_date_source: RunDateSource::Shared,
            missing_projection: MissingProjection::Strict,
            run_date: None,
            target_chunks: TargetChunks::default(),
        }
    }
}

impl RecipeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variables.is_empty() {
            return Err(ConfigError::NoVariables);
        }
        if self.forecast_hours == 0 {
            return Err(ConfigError::NoForecastHours);
        }
        if let Some((dim, _)) = self.target_chunks.iter().find(|(_, len)| **len == 0) {
            return Err(ConfigError::ZeroChunk(dim.clone()));
        }
        // Only the base is checked here; the date is irrelevant.
        UrlBuilder::with_base(&self.base_url, RunDate::yesterday_utc(), self.cycle)?;
        Ok(())
    }

    /// Pinned run date if set, otherwise yesterday (UTC). Call once per execution.
    pub fn resolve_run_date(&self) -> RunDate {
        self.run_date.unwrap_or_else(RunDate::yesterday_utc)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("riops")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Parse configuration from `path` without validating it.
pub fn read_from_path(path: &Path) -> Result<RecipeConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Load and validate configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<RecipeConfig> {
    let cfg = read_from_path(path)?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Write the default configuration to `path` unless a file is already there.
pub fn init_if_missing(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    let toml = toml::to_string_pretty(&RecipeConfig::default())?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    tracing::info!("created default config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RecipeConfig::default();
        assert_eq!(cfg.base_url, RIOPS_PS_BASE_URL);
        assert_eq!(cfg.cycle, ForecastCycle::Z00);
        assert_eq!(cfg.variables, ["VOTEMPER", "VOSALINE", "VOZOCRTX", "VOMECRTY"]);
        assert_eq!(cfg.forecast_hours, 84);
        assert_eq!(cfg.run_date_source, RunDateSource::Shared);
        assert_eq!(cfg.missing_projection, MissingProjection::Strict);
        assert!(cfg.run_date.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RecipeConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RecipeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.variables, cfg.variables);
        assert_eq!(parsed.forecast_hours, cfg.forecast_hours);
        assert_eq!(parsed.target_chunks, cfg.target_chunks);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "http://127.0.0.1:9000/riops/"
            cycle = "12"
            variables = ["VOTEMPER", "SOSSHEIG"]
            forecast_hours = 48
            run_date_source = "filename"
            missing_projection = "tolerant"
            run_date = "20240310"

            [target_chunks]
            time = 6
            xc = 225
            yc = 205
        "#;
        let cfg: RecipeConfig = toml::from_str(toml).unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.cycle, ForecastCycle::Z12);
        assert_eq!(cfg.variables, ["VOTEMPER", "SOSSHEIG"]);
        assert_eq!(cfg.forecast_hours, 48);
        assert_eq!(cfg.run_date_source, RunDateSource::Filename);
        assert_eq!(cfg.missing_projection, MissingProjection::Tolerant);
        assert_eq!(cfg.resolve_run_date().yyyymmdd(), "20240310");
        assert_eq!(cfg.target_chunks.get("time"), Some(6));
    }

    #[test]
    fn config_toml_optional_fields_default() {
        let toml = r#"
            base_url = "https://dd.weather.gc.ca/model_riops/netcdf/forecast/polar_stereographic"
            variables = ["VOTEMPER"]
            forecast_hours = 84

            [target_chunks]
            time = 1
            xc = 450
            yc = 410
        "#;
        let cfg: RecipeConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.cycle, ForecastCycle::Z00);
        assert_eq!(cfg.run_date_source, RunDateSource::Shared);
        assert_eq!(cfg.missing_projection, MissingProjection::Strict);
        assert!(cfg.run_date.is_none());
    }

    #[test]
    fn unpinned_run_date_is_yesterday_utc() {
        let cfg = RecipeConfig::default();
        let before = RunDate::yesterday_utc();
        let got = cfg.resolve_run_date();
        let after = RunDate::yesterday_utc();
        assert!(got == before || got == after, "{got}");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = RecipeConfig::default();
        cfg.variables.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoVariables)));

        let mut cfg = RecipeConfig::default();
        cfg.forecast_hours = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::NoForecastHours)));

        let mut cfg = RecipeConfig::default();
        cfg.target_chunks = toml::from_str("time = 1\nxc = 0\nyc = 410").unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroChunk(d)) if d == "xc"));

        let mut cfg = RecipeConfig::default();
        cfg.base_url = "dd.weather.gc.ca".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Url(_))));
    }

    #[test]
    fn bad_pinned_run_date_fails_to_parse() {
        let toml = r#"
            base_url = "https://dd.weather.gc.ca/x"
            variables = ["VOTEMPER"]
            forecast_hours = 84
            run_date = "2024-03-10"
            [target_chunks]
            time = 1
        "#;
        assert!(toml::from_str::<RecipeConfig>(toml).is_err());
    }
}
