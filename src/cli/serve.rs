//! Serve command implementation

use crate::alert::AlertSet;
use crate::config::Config;
use crate::monitor::MonitorLoop;
use crate::render::WebDriverFactory;
use crate::server;
use crate::snapshot::SnapshotStore;
use clap::Args;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address override (defaults to [server].bind_addr)
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeArgs {
    pub async fn execute(&self, config: Config) -> anyhow::Result<()> {
        let store = SnapshotStore::new();
        let notifier = super::build_notifier(&config);
        let alerts = AlertSet::from_config(&config.alerts);
        let factory = WebDriverFactory::new(config.monitor.clone());

        let monitor = MonitorLoop::new(
            config.monitor,
            Box::new(factory),
            notifier,
            alerts,
            store.clone(),
        );

        // The monitor runs in the background; API handlers only ever read
        // the store, so a degraded or terminated monitor never takes the
        // API down with it. If the monitor task stops for any reason the
        // snapshot is marked fatal_error.
        monitor.spawn();

        let bind_addr = self.bind.as_deref().unwrap_or(&config.server.bind_addr);
        server::serve(bind_addr, store).await
    }
}
