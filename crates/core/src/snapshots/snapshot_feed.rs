//! Load/error/retry state around a snapshot provider.

use log::{debug, info, warn};
use std::sync::{Arc, RwLock};

use super::snapshots_model::Snapshot;
use super::snapshots_traits::{FetchError, SnapshotProviderTrait};

/// Where the feed is in its fetch lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight; nothing may be rendered from this feed
    Loading,
    /// The authoritative, immutable snapshot sequence, ascending by date
    Loaded(Arc<[Snapshot]>),
    /// The last fetch failed; the UI offers a retry
    Failed(FetchError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn snapshots(&self) -> Option<&[Snapshot]> {
        match self {
            LoadState::Loaded(snapshots) => Some(snapshots),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Snapshot sequence for one subject, fetched through a provider.
///
/// The feed never retries on its own. A failed fetch stays failed until the
/// caller invokes [`SnapshotFeed::retry`].
pub struct SnapshotFeed {
    provider: Arc<dyn SnapshotProviderTrait>,
    subject_id: String,
    state: RwLock<LoadState>,
}

impl SnapshotFeed {
    /// Creates an idle feed; call [`SnapshotFeed::load`] to fetch.
    pub fn new(provider: Arc<dyn SnapshotProviderTrait>, subject_id: impl Into<String>) -> Self {
        Self {
            provider,
            subject_id: subject_id.into(),
            state: RwLock::new(LoadState::Idle),
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Current state. Loaded data is shared, so this is cheap to clone.
    pub fn state(&self) -> LoadState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_state(&self, next: LoadState) {
        let mut guard = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = next;
    }

    /// Fetches the subject's snapshots and records the outcome.
    pub async fn load(&self) -> LoadState {
        self.set_state(LoadState::Loading);
        debug!("Fetching net worth snapshots for {}", self.subject_id);

        let next = match self.provider.fetch_snapshots(&self.subject_id).await {
            Ok(mut snapshots) => {
                snapshots.sort_by_key(|s| s.date);
                info!(
                    "Loaded {} net worth snapshots for {}",
                    snapshots.len(),
                    self.subject_id
                );
                LoadState::Loaded(snapshots.into())
            }
            Err(error) => {
                warn!(
                    "Failed to fetch net worth snapshots for {}: {}",
                    self.subject_id, error
                );
                LoadState::Failed(error)
            }
        };

        self.set_state(next.clone());
        next
    }

    /// Re-issues the fetch after a failure.
    ///
    /// Only an idle or failed feed refetches; a feed that is loading or
    /// already loaded returns its current state untouched.
    pub async fn retry(&self) -> LoadState {
        let current = self.state();
        match current {
            LoadState::Idle | LoadState::Failed(_) => {
                debug!("Retrying snapshot fetch for {}", self.subject_id);
                self.load().await
            }
            LoadState::Loading | LoadState::Loaded(_) => current,
        }
    }
}
