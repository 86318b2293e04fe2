//! CSV-based assumption loader
//!
//! Loads lending policy overrides from data/assumptions/lending_policy.csv.
//! The file has a `name,value` header and one row per overridden value.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File name of the lending policy table inside the assumptions directory
pub const LENDING_POLICY_FILE: &str = "lending_policy.csv";

#[derive(Debug, Error)]
pub enum AssumptionsError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid value {value:?} for assumption {name}")]
    InvalidValue { name: String, value: String },

    #[error("unknown assumption {0:?}")]
    UnknownName(String),
}

/// Load the raw `name -> value` pairs of the lending policy table
pub fn load_lending_policy(path: &Path) -> Result<HashMap<String, String>, AssumptionsError> {
    let file_path = path.join(LENDING_POLICY_FILE);
    let file = File::open(&file_path).map_err(|source| AssumptionsError::Io {
        path: file_path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut values = HashMap::new();

    for result in reader.records() {
        let record = result.map_err(|source| AssumptionsError::Csv {
            path: file_path.clone(),
            source,
        })?;
        let name = record.get(0).unwrap_or_default().trim();
        let value = record.get(1).unwrap_or_default().trim();

        if name.is_empty() || name.starts_with('#') {
            continue;
        }
        if values.insert(name.to_string(), value.to_string()).is_some() {
            log::warn!("{} sets {} more than once, keeping the last value", file_path.display(), name);
        }
    }

    Ok(values)
}

/// Raw assumption tables as read from disk
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub lending_policy: HashMap<String, String>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self, AssumptionsError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self, AssumptionsError> {
        Ok(Self {
            lending_policy: load_lending_policy(path)?,
        })
    }

    /// Look up a numeric value, `None` when the table leaves it unset
    pub fn number(&self, name: &str) -> Result<Option<f64>, AssumptionsError> {
        match self.lending_policy.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(Some)
                .ok_or_else(|| AssumptionsError::InvalidValue {
                    name: name.to_string(),
                    value: raw.clone(),
                }),
        }
    }

    /// Look up a text value, `None` when the table leaves it unset
    pub fn text(&self, name: &str) -> Option<&str> {
        self.lending_policy.get(name).map(String::as_str)
    }
}
