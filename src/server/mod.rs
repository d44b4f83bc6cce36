//! Read API
//!
//! Thin front end over the snapshot store. Handlers only read the store;
//! they never touch the browser session and never wait on monitor work.

use crate::snapshot::{MonitorStatus, Snapshot, SnapshotStore};
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Health check payload for hosting platforms
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub scraper_status: MonitorStatus,
    pub timestamp: DateTime<Utc>,
}

/// Build the API router
pub fn router(store: SnapshotStore) -> Router {
    Router::new()
        .route("/api/prices", get(prices))
        .route("/health", get(health))
        .with_state(store)
}

/// Bind and serve until the process exits
pub async fn serve(bind_addr: &str, store: SnapshotStore) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(addr = bind_addr, "read API listening");
    axum::serve(listener, router(store)).await?;
    Ok(())
}

async fn prices(State(store): State<SnapshotStore>) -> Json<Snapshot> {
    Json(store.read().await)
}

async fn health(State(store): State<SnapshotStore>) -> Json<Health> {
    let snapshot = store.read().await;
    Json(Health {
        status: "healthy",
        scraper_status: snapshot.status,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prices_returns_current_snapshot() {
        let store = SnapshotStore::new();
        store
            .publish(Snapshot::success("₹9,150".into(), "₹112".into(), Utc::now()))
            .await;

        let Json(snapshot) = prices(State(store)).await;
        assert_eq!(snapshot.gold_price.as_deref(), Some("₹9,150"));
        assert_eq!(snapshot.status, MonitorStatus::Success);
    }

    #[tokio::test]
    async fn test_prices_before_first_cycle() {
        let store = SnapshotStore::new();
        let Json(snapshot) = prices(State(store)).await;
        assert_eq!(snapshot.status, MonitorStatus::Initializing);
        assert!(snapshot.gold_price.is_none());
    }

    #[tokio::test]
    async fn test_health_reflects_scraper_status() {
        let store = SnapshotStore::new();
        store.mark_fatal().await;

        let Json(health) = health(State(store)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.scraper_status, MonitorStatus::FatalError);
    }
}
