use crate::license_resolution::domain::LicenseLabel;
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Per-name license cache with single-flight semantics.
///
/// Each lookup name owns one `OnceCell`. The first caller runs the
/// resolution; concurrent callers for the same name wait on that cell and
/// observe the same label. Entries are write-once and live for the run.
///
/// The DashMap shard lock is only held while fetching the cell, never across
/// an `.await`, so workers resolving different names do not block each other.
#[derive(Debug, Default)]
pub struct SingleFlightCache {
    entries: DashMap<String, Arc<OnceCell<LicenseLabel>>>,
}

impl SingleFlightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached label if resolution for `name` has completed
    pub fn get(&self, name: &str) -> Option<LicenseLabel> {
        self.entries
            .get(name)
            .and_then(|cell| cell.get().cloned())
    }

    /// Returns the cached label for `name`, running `resolve` at most once
    /// across all concurrent callers.
    pub async fn get_or_resolve<F, Fut>(&self, name: &str, resolve: F) -> LicenseLabel
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = LicenseLabel>,
    {
        if let Some(label) = self.get(name) {
            return label;
        }

        let cell = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .value()
            .clone();

        cell.get_or_init(resolve).await.clone()
    }

    /// Number of names with a completed resolution
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
