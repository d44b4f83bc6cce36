//! Shared snapshot cell

use super::{MonitorStatus, Snapshot};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe holder of the current snapshot
///
/// Cloning is cheap and shares the same cell. Replacement is atomic with
/// respect to `read`: readers see either the previous record or the new one,
/// never a half-written mix. The write lock is held only for the swap
/// itself, so readers never wait on browser or network work.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl SnapshotStore {
    /// Create a store holding the initializing record
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Snapshot::initializing())),
        }
    }

    /// Read the current snapshot
    pub async fn read(&self) -> Snapshot {
        self.inner.read().await.clone()
    }

    /// Replace the current snapshot
    pub async fn publish(&self, snapshot: Snapshot) {
        let mut current = self.inner.write().await;
        *current = snapshot;
    }

    /// Mark the last cycle as failed, keeping previously fetched prices
    pub async fn mark_error(&self) {
        let mut current = self.inner.write().await;
        current.status = MonitorStatus::Error;
    }

    /// Mark the monitor as permanently terminated
    pub async fn mark_fatal(&self) {
        let mut current = self.inner.write().await;
        current.status = MonitorStatus::FatalError;
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_store_starts_initializing() {
        let store = SnapshotStore::new();
        assert_eq!(store.read().await, Snapshot::initializing());
    }

    #[tokio::test]
    async fn test_publish_read_round_trip() {
        let store = SnapshotStore::new();
        let at = Utc::now();
        let snap = Snapshot::success("₹9,150.00".into(), "₹112.50".into(), at);

        store.publish(snap.clone()).await;
        let read_back = store.read().await;

        assert_eq!(read_back, snap);
        assert_eq!(read_back.gold_price.as_deref(), Some("₹9,150.00"));
        assert_eq!(read_back.last_updated, Some(at));
    }

    #[tokio::test]
    async fn test_mark_error_keeps_prices() {
        let store = SnapshotStore::new();
        store
            .publish(Snapshot::success("100".into(), "10".into(), Utc::now()))
            .await;

        store.mark_error().await;
        let snap = store.read().await;

        assert_eq!(snap.status, MonitorStatus::Error);
        assert_eq!(snap.gold_price.as_deref(), Some("100"));
        assert_eq!(snap.silver_price.as_deref(), Some("10"));
    }

    #[tokio::test]
    async fn test_clones_share_the_cell() {
        let store = SnapshotStore::new();
        let reader = store.clone();

        store
            .publish(Snapshot::success("1".into(), "2".into(), Utc::now()))
            .await;
        store.mark_fatal().await;

        assert_eq!(reader.read().await.status, MonitorStatus::FatalError);
    }

    #[tokio::test]
    async fn test_concurrent_readers() {
        let store = SnapshotStore::new();
        store
            .publish(Snapshot::success("1".into(), "2".into(), Utc::now()))
            .await;

        let mut handles = vec![];
        for _ in 0..8 {
            let reader = store.clone();
            handles.push(tokio::spawn(async move {
                reader.read().await.status
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), MonitorStatus::Success);
        }
    }
}
