//! Data file discovery.
//!
//! A data file is looked up among prioritized candidate paths: an optional
//! environment-variable override first, then `public/data/`, `public/` and
//! the data root itself. The first existing path wins.

use std::env;
use std::path::PathBuf;

use crate::error::{DatasetError, DatasetResult};

/// A named CSV file and where to look for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    /// Directory the relative candidates are resolved against.
    pub root: PathBuf,
    /// File name, e.g. `selected_planets_full.csv`.
    pub file_name: String,
    /// Environment variable holding an explicit path override.
    pub env_override: Option<String>,
}

impl DataSource {
    pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file_name: file_name.into(),
            env_override: None,
        }
    }

    pub fn with_env_override(mut self, var: impl Into<String>) -> Self {
        self.env_override = Some(var.into());
        self
    }

    /// Candidate paths in priority order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(4);
        if let Some(var) = &self.env_override {
            if let Ok(value) = env::var(var) {
                if !value.trim().is_empty() {
                    paths.push(PathBuf::from(value.trim()));
                }
            }
        }
        paths.push(self.root.join("public").join("data").join(&self.file_name));
        paths.push(self.root.join("public").join(&self.file_name));
        paths.push(self.root.join(&self.file_name));
        paths
    }

    /// First existing candidate, or `None` when nothing is found.
    pub fn resolve(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|p| p.exists())
    }

    /// Like [`resolve`](Self::resolve) but reports the searched paths on failure.
    pub fn locate(&self) -> DatasetResult<PathBuf> {
        let candidates = self.candidates();
        match candidates.iter().find(|p| p.exists()) {
            Some(path) => Ok(path.clone()),
            None => Err(DatasetError::NotFound {
                searched: candidates,
            }),
        }
    }
}
