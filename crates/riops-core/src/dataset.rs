//! In-memory header of an opened forecast file.
//!
//! Holds dimensions, variables with their attributes and serialization
//! encoding, and global attributes. Array data stays with whatever opened the
//! file; only metadata flows through the recipe hooks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type Attributes = BTreeMap<String, Value>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("variable {0:?} not found in dataset")]
    MissingVariable(String),
}

/// How a variable is written to the target store (units, calendar, dtype, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Encoding(BTreeMap<String, Value>);

impl Encoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// CF time encoding (`units` + `calendar`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEncoding {
    pub units: String,
    pub calendar: String,
}

impl From<TimeEncoding> for Encoding {
    fn from(t: TimeEncoding) -> Self {
        let mut e = Encoding::new();
        e.insert("units", t.units);
        e.insert("calendar", t.calendar);
        e
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub dims: Vec<String>,
    #[serde(default)]
    pub attrs: Attributes,
    #[serde(default)]
    pub encoding: Encoding,
    /// Coordinate variable (as opposed to a data variable).
    #[serde(default)]
    pub coordinate: bool,
}

impl Variable {
    pub fn new<I, S>(dims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dims: dims.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn coordinate<I, S>(dims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            coordinate: true,
            ..Self::new(dims)
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub dims: BTreeMap<String, usize>,
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
    #[serde(default)]
    pub attrs: Attributes,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dim(mut self, name: impl Into<String>, len: usize) -> Self {
        self.dims.insert(name.into(), len);
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, var: Variable) -> Self {
        self.variables.insert(name.into(), var);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.get_mut(name)
    }

    /// Removes `name`, failing if it is absent.
    pub fn drop_variable(&mut self, name: &str) -> Result<Variable, DatasetError> {
        self.variables
            .remove(name)
            .ok_or_else(|| DatasetError::MissingVariable(name.to_string()))
    }

    /// Removes `name` if present.
    pub fn remove_variable(&mut self, name: &str) -> Option<Variable> {
        self.variables.remove(name)
    }
}
