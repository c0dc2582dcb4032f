//! The assembled recipe: file pattern, target chunks and input hook, all tied
//! to a single run date.
//!
//! The executing framework drives iteration, download and store writes; this
//! type only hands it consistent declarations.

use crate::config::{ConfigError, RecipeConfig};
use crate::dataset::{Dataset, TimeEncoding};
use crate::normalize::{InputNormalizer, NormalizeError};
use crate::pattern::{ConcatDim, FilePattern, InputFile, MergeDim};
use crate::run_date::{RunDate, RunDateSource};
use crate::url_builder::{ForecastCycle, UrlBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chunk length per output dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetChunks(BTreeMap<String, u64>);

impl Default for TargetChunks {
    /// One time step per chunk, whole 450x410 grid.
    fn default() -> Self {
        let mut chunks = BTreeMap::new();
        chunks.insert("time".to_string(), 1);
        chunks.insert("xc".to_string(), 450);
        chunks.insert("yc".to_string(), 410);
        Self(chunks)
    }
}

impl TargetChunks {
    pub fn get(&self, dim: &str) -> Option<u64> {
        self.0.get(dim).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.0.iter()
    }
}

/// Serializable description of a recipe, for the executing framework.
#[derive(Debug, Clone, Serialize)]
pub struct RecipePlan {
    pub run_date: RunDate,
    pub cycle: ForecastCycle,
    pub run_date_source: RunDateSource,
    pub time_encoding: TimeEncoding,
    pub merge_dim: MergeDim,
    pub concat_dim: ConcatDim,
    pub target_chunks: TargetChunks,
    pub inputs: Vec<InputFile>,
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pattern: FilePattern,
    target_chunks: TargetChunks,
    normalizer: InputNormalizer,
}

impl Recipe {
    pub fn new(
        pattern: FilePattern,
        target_chunks: TargetChunks,
        normalizer: InputNormalizer,
    ) -> Self {
        Self {
            pattern,
            target_chunks,
            normalizer,
        }
    }

    /// Builds the recipe for `run_date`, shared by the URL builder and the normalizer.
    pub fn from_config(cfg: &RecipeConfig, run_date: RunDate) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let url_builder = UrlBuilder::with_base(&cfg.base_url, run_date, cfg.cycle)?;
        let pattern = FilePattern::new(
            url_builder,
            MergeDim::variables(cfg.variables.clone()),
            ConcatDim::forecast_hours(cfg.forecast_hours),
        );
        let normalizer = InputNormalizer::new(run_date)
            .with_run_date_source(cfg.run_date_source)
            .with_missing_projection(cfg.missing_projection);
        tracing::debug!(
            run_date = %run_date,
            cycle = %cfg.cycle,
            inputs = pattern.len(),
            "recipe assembled"
        );
        Ok(Self::new(pattern, cfg.target_chunks.clone(), normalizer))
    }

    pub fn run_date(&self) -> RunDate {
        self.pattern.url_builder().run_date()
    }

    pub fn pattern(&self) -> &FilePattern {
        &self.pattern
    }

    pub fn target_chunks(&self) -> &TargetChunks {
        &self.target_chunks
    }

    pub fn normalizer(&self) -> &InputNormalizer {
        &self.normalizer
    }

    /// Post-read hook: `(dataset, filename) -> dataset`.
    pub fn process_input(&self, ds: Dataset, filename: &str) -> Result<Dataset, NormalizeError> {
        self.normalizer.process_input(ds, filename)
    }

    pub fn plan(&self) -> RecipePlan {
        let run_date = self.run_date();
        let builder = self.pattern.url_builder();
        RecipePlan {
            run_date,
            cycle: builder.cycle(),
            run_date_source: self.normalizer.run_date_source(),
            time_encoding: InputNormalizer::time_encoding(run_date),
            merge_dim: self.pattern.merge_dim().clone(),
            concat_dim: self.pattern.concat_dim().clone(),
            target_chunks: self.target_chunks.clone(),
            inputs: self.pattern.inputs().collect(),
        }
    }
}
