//! The price-monitor loop
//!
//! One long-lived sequential flow: render, extract, publish, alert, sleep.
//! The remote page is a third-party surface that intermittently fails to
//! render or changes markup, so every per-cycle fault is recoverable and
//! retried on a fixed cadence. The only fatal condition is failing to
//! acquire the browser session at startup.

use crate::alert::AlertSet;
use crate::config::MonitorConfig;
use crate::extract::{self, ExtractError};
use crate::notify::Notifier;
use crate::render::{PageRenderer, RenderError, RendererFactory};
use crate::snapshot::{Snapshot, SnapshotStore};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

/// A recoverable fault inside one cycle
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Orchestrates render → extract → publish → alert → sleep, forever
pub struct MonitorLoop {
    config: MonitorConfig,
    factory: Box<dyn RendererFactory>,
    notifier: Arc<dyn Notifier>,
    alerts: AlertSet,
    store: SnapshotStore,
}

impl MonitorLoop {
    pub fn new(
        config: MonitorConfig,
        factory: Box<dyn RendererFactory>,
        notifier: Arc<dyn Notifier>,
        alerts: AlertSet,
        store: SnapshotStore,
    ) -> Self {
        Self {
            config,
            factory,
            notifier,
            alerts,
            store,
        }
    }

    /// Run the monitor until the process exits
    ///
    /// Returns only if the browser session cannot be acquired; the snapshot
    /// is then left at `fatal_error` and no cycles ever run. Once running,
    /// a failed cycle marks the snapshot `status=error` and the loop retries
    /// after the usual refresh interval.
    pub async fn run(mut self) -> anyhow::Result<()> {
        info!(
            url = %self.config.url,
            refresh_interval_secs = self.config.refresh_interval_secs,
            "starting price monitor"
        );

        let mut renderer = match self.factory.acquire().await {
            Ok(renderer) => {
                info!("browser session acquired");
                renderer
            }
            Err(e) => {
                error!(error = %e, "could not acquire browser session, monitor terminated");
                self.store.mark_fatal().await;
                return Err(e.into());
            }
        };

        let interval = Duration::from_secs(self.config.refresh_interval_secs);
        loop {
            if let Err(e) = self.cycle(renderer.as_mut()).await {
                warn!(error = %e, "cycle failed");
                self.store.mark_error().await;
            }
            tokio::time::sleep(interval).await;
        }
    }

    /// Spawn the monitor as a supervised background task
    ///
    /// If the loop ever stops, including a panic escaping cycle-level fault
    /// handling, the snapshot is left at `fatal_error` so readers see that
    /// no further cycles will run.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        let store = self.store.clone();
        tokio::spawn(async move {
            match tokio::spawn(self.run()).await {
                Ok(Err(e)) => error!(error = %e, "price monitor terminated"),
                Ok(Ok(())) => error!("price monitor exited unexpectedly"),
                Err(e) => error!(error = %e, "price monitor panicked"),
            }
            store.mark_fatal().await;
        })
    }

    /// One render-extract-publish-alert pass
    async fn cycle(&mut self, renderer: &mut dyn PageRenderer) -> Result<(), CycleError> {
        let page = renderer.open(&self.config.url).await?;
        let prices = extract::extract(&page)?;

        self.store
            .publish(Snapshot::success(
                prices.gold.clone(),
                prices.silver.clone(),
                Utc::now(),
            ))
            .await;

        self.alerts
            .evaluate(&prices, self.notifier.as_ref())
            .await;

        info!(gold = %prices.gold, silver = %prices.silver, "prices updated");
        Ok(())
    }
}
