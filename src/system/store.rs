use std::sync::{Arc, PoisonError, RwLock};

use super::snapshot::HealthSnapshot;

/// Shared cache holding the most recent [`HealthSnapshot`].
///
/// Single writer (the sampler), any number of readers (the status
/// endpoint). The snapshot is `Copy`, so readers take a copy out and
/// never hold the lock while rendering; writers replace the whole value
/// rather than mutating fields in place.
#[derive(Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<HealthSnapshot>>,
}

impl SnapshotStore {
    /// Starts zeroed; the store serves the empty snapshot until the
    /// first tick publishes a real one.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: HealthSnapshot) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }

    pub fn latest(&self) -> HealthSnapshot {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let store = SnapshotStore::new();
        assert_eq!(store.latest(), HealthSnapshot::default());
    }

    #[test]
    fn publish_replaces_wholesale() {
        let store = SnapshotStore::new();
        store.publish(HealthSnapshot::new(8_000, 2_000, 75));
        store.publish(HealthSnapshot::new(8_000, 3_000, 50));

        let snap = store.latest();
        assert_eq!(snap.free_mb, 3_000);
        assert_eq!(snap.used_mb, 5_000);
        assert_eq!(snap.load_centi, 50);
    }

    #[test]
    fn clones_share_the_same_cache() {
        let store = SnapshotStore::new();
        let reader = store.clone();
        store.publish(HealthSnapshot::new(4_000, 1_000, 10));
        assert_eq!(reader.latest().free_mb, 1_000);
    }
}
