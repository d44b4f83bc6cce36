//! Watch command implementation
//!
//! Standalone console runner: same monitor loop as `serve`, no HTTP layer.

use crate::alert::AlertSet;
use crate::config::Config;
use crate::monitor::MonitorLoop;
use crate::render::WebDriverFactory;
use crate::snapshot::SnapshotStore;
use clap::Args;

#[derive(Args, Debug)]
pub struct WatchArgs {}

impl WatchArgs {
    pub async fn execute(&self, config: Config) -> anyhow::Result<()> {
        println!("spotwatch - live spot price monitor");
        println!("  URL:      {}", config.monitor.url);
        println!("  Interval: {}s", config.monitor.refresh_interval_secs);

        let store = SnapshotStore::new();
        let notifier = super::build_notifier(&config);
        let alerts = AlertSet::from_config(&config.alerts);
        let factory = WebDriverFactory::new(config.monitor.clone());

        let monitor = MonitorLoop::new(
            config.monitor,
            Box::new(factory),
            notifier,
            alerts,
            store,
        );

        monitor.run().await
    }
}
