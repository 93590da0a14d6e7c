//! Data provider trait and structured error types.
//!
//! The renderer only ever sees a `Dataset`. Where that dataset comes from
//! (the built-in tables or a file on disk) is hidden behind `DataProvider`,
//! so a real backend could be slotted in later returning the same shapes.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::domain::AnomalyId;

/// Errors at the data-loading boundary.
///
/// Displayable in both CLI and TUI contexts. Nothing past this boundary fails.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML dataset {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON dataset {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate anomaly id {id}")]
    DuplicateAnomalyId { id: AnomalyId },

    #[error("invalid dataset: {0}")]
    Invalid(String),
}

/// Source of the dataset shown by the dashboard.
pub trait DataProvider {
    /// Short label for logs and the status bar.
    fn name(&self) -> String;

    fn load(&self) -> Result<Dataset, DataError>;
}

/// The authored demonstration tables. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl DataProvider for BuiltinProvider {
    fn name(&self) -> String {
        "built-in".to_string()
    }

    fn load(&self) -> Result<Dataset, DataError> {
        Ok(Dataset::builtin())
    }
}

/// Dataset stored on disk as TOML (`.toml`) or JSON (anything else).
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_toml(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }
}

impl DataProvider for FileProvider {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset, DataError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;

        let dataset: Dataset = if self.is_toml() {
            toml::from_str(&content).map_err(|source| DataError::Toml {
                path: self.path.clone(),
                source,
            })?
        } else {
            serde_json::from_str(&content).map_err(|source| DataError::Json {
                path: self.path.clone(),
                source,
            })?
        };

        dataset.validate()?;
        debug!(
            anomalies = dataset.anomalies.len(),
            trend_points = dataset.trend.len(),
            "dataset validated"
        );
        info!(path = %self.path.display(), "loaded dataset from file");
        Ok(dataset)
    }
}

/// Pick the provider for an optional dataset path.
pub fn provider_for(path: Option<&Path>) -> Box<dyn DataProvider> {
    match path {
        Some(path) => Box::new(FileProvider::new(path)),
        None => Box::new(BuiltinProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_provider_loads() {
        let data = BuiltinProvider.load().unwrap();
        assert_eq!(data, Dataset::builtin());
        assert_eq!(BuiltinProvider.name(), "built-in");
    }

    #[test]
    fn missing_file_is_io_error() {
        let provider = FileProvider::new("/nonexistent/guardian/dataset.json");
        assert!(matches!(provider.load(), Err(DataError::Io { .. })));
    }

    #[test]
    fn provider_for_picks_by_path() {
        assert_eq!(provider_for(None).name(), "built-in");
        assert_eq!(
            provider_for(Some(Path::new("data.toml"))).name(),
            "data.toml"
        );
    }

    #[test]
    fn toml_detection_is_case_insensitive() {
        assert!(FileProvider::new("a/b.TOML").is_toml());
        assert!(!FileProvider::new("a/b.json").is_toml());
        assert!(!FileProvider::new("a/b").is_toml());
    }
}
