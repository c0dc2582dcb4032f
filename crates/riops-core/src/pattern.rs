//! Axis declarations and the input file pattern for one recipe run.

use crate::url_builder::UrlBuilder;
use serde::Serialize;

pub const MERGE_DIM_NAME: &str = "variable";
pub const CONCAT_DIM_NAME: &str = "time";

/// Hourly files in one RIOPS forecast.
pub const FORECAST_HOURS: u32 = 84;

/// Axis whose keys are combined side by side (one variable per file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeDim {
    pub name: String,
    pub keys: Vec<String>,
}

impl MergeDim {
    pub fn variables(keys: Vec<String>) -> Self {
        Self {
            name: MERGE_DIM_NAME.to_string(),
            keys,
        }
    }
}

/// Axis whose keys are stacked end to end (one forecast hour per file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcatDim {
    pub name: String,
    pub keys: Vec<u32>,
    pub nitems_per_file: usize,
}

impl ConcatDim {
    /// Hours `0..hours`, one time step per file.
    pub fn forecast_hours(hours: u32) -> Self {
        Self {
            name: CONCAT_DIM_NAME.to_string(),
            keys: (0..hours).collect(),
            nitems_per_file: 1,
        }
    }
}

/// One source file of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFile {
    pub variable: String,
    pub time: u32,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct FilePattern {
    url_builder: UrlBuilder,
    merge: MergeDim,
    concat: ConcatDim,
}

impl FilePattern {
    pub fn new(url_builder: UrlBuilder, merge: MergeDim, concat: ConcatDim) -> Self {
        Self {
            url_builder,
            merge,
            concat,
        }
    }

    pub fn url_builder(&self) -> &UrlBuilder {
        &self.url_builder
    }

    pub fn merge_dim(&self) -> &MergeDim {
        &self.merge
    }

    pub fn concat_dim(&self) -> &ConcatDim {
        &self.concat
    }

    pub fn url_for(&self, variable: &str, time: u32) -> String {
        self.url_builder.make_url(variable, time)
    }

    pub fn len(&self) -> usize {
        self.merge.keys.len() * self.concat.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every input, variable-major: all hours of the first variable, then the next.
    pub fn inputs(&self) -> impl Iterator<Item = InputFile> + '_ {
        self.merge.keys.iter().flat_map(move |variable| {
            self.concat.keys.iter().map(move |&time| InputFile {
                variable: variable.clone(),
                time,
                url: self.url_for(variable, time),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_date::RunDate;
    use crate::variable::active_variables;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn pattern() -> FilePattern {
        let d = RunDate::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        FilePattern::new(
            UrlBuilder::new(d),
            MergeDim::variables(active_variables()),
            ConcatDim::forecast_hours(FORECAST_HOURS),
        )
    }

    #[test]
    fn concat_dim_is_84_hourly_steps() {
        let c = ConcatDim::forecast_hours(FORECAST_HOURS);
        assert_eq!(c.name, "time");
        assert_eq!(c.keys.len(), 84);
        assert_eq!(c.keys.first(), Some(&0));
        assert_eq!(c.keys.last(), Some(&83));
        assert_eq!(c.nitems_per_file, 1);
    }

    #[test]
    fn cross_product_size_and_order() {
        let p = pattern();
        assert_eq!(p.len(), 4 * 84);
        let inputs: Vec<_> = p.inputs().collect();
        assert_eq!(inputs.len(), p.len());
        assert_eq!(inputs[0].variable, "VOTEMPER");
        assert_eq!(inputs[0].time, 0);
        assert_eq!(inputs[83].time, 83);
        assert_eq!(inputs[84].variable, "VOSALINE");
        assert_eq!(inputs[84].time, 0);
    }

    #[test]
    fn urls_are_unique_and_match_builder() {
        let p = pattern();
        let mut seen = HashSet::new();
        for input in p.inputs() {
            assert_eq!(input.url, p.url_builder().make_url(&input.variable, input.time));
            assert!(seen.insert(input.url), "duplicate url");
        }
    }

    #[test]
    fn empty_merge_dim_yields_nothing() {
        let d = RunDate::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let p = FilePattern::new(
            UrlBuilder::new(d),
            MergeDim::variables(Vec::new()),
            ConcatDim::forecast_hours(FORECAST_HOURS),
        );
        assert!(p.is_empty());
        assert_eq!(p.inputs().count(), 0);
    }
}
