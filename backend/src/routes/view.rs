use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of a page-style request.
///
/// Data problems (missing file, nothing to show) are reported as
/// `Unavailable` with a human-readable reason instead of an HTTP error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewState<T> {
    Ready { data: T },
    Unavailable { reason: String },
}

impl<T> ViewState<T> {
    pub fn ready(data: T) -> Self {
        ViewState::Ready { data }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        ViewState::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready { data } => Some(data),
            ViewState::Unavailable { .. } => None,
        }
    }
}

/// Identity of the file a view was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub path: PathBuf,
    pub rows: usize,
    /// Hex SHA-256 of the file contents.
    pub checksum: String,
}
