//! Snapshot provider traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::snapshots_model::Snapshot;

/// Structured fetch failure reported by a snapshot provider.
///
/// Carried as data all the way to the UI, which shows `detail` next to a
/// retry action.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {detail}")]
pub struct FetchError {
    /// Machine-readable code, e.g. `network`, `not_found`, `http_503`
    pub code: String,
    /// Human-readable description
    pub detail: String,
}

impl FetchError {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

/// Source of raw snapshot sequences for a subject.
#[async_trait]
pub trait SnapshotProviderTrait: Send + Sync {
    /// Fetch all snapshots recorded for a subject.
    ///
    /// Providers should return snapshots ordered by ascending date; intervals
    /// may be irregular.
    async fn fetch_snapshots(&self, subject_id: &str) -> Result<Vec<Snapshot>, FetchError>;
}
