//! CLI interface for spotwatch
//!
//! Provides subcommands for:
//! - `serve`: run the monitor with the JSON read API
//! - `watch`: run the monitor standalone, prices to the console/log only
//! - `config`: show the effective configuration
//!
//! Both `serve` and `watch` drive the same monitor loop; they differ only in
//! what sits in front of the snapshot store.

mod serve;
mod watch;

pub use serve::ServeArgs;
pub use watch::WatchArgs;

use crate::config::Config;
use crate::notify::{ConsoleNotifier, Notifier, SmtpNotifier};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "spotwatch")]
#[command(about = "Live gold/silver spot price monitor with threshold email alerts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the monitor and serve the read API
    Serve(ServeArgs),
    /// Run the monitor standalone, without the API
    Watch(WatchArgs),
    /// Show the effective configuration
    Config,
}

/// Pick the notification backend
///
/// SMTP when credentials are present in the environment, otherwise the
/// console. Missing mail credentials are never a startup fault.
pub(crate) fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    match SmtpNotifier::from_env(&config.mail) {
        Ok(notifier) => Arc::new(notifier),
        Err(e) => {
            warn!(error = %e, "mail transport unavailable, alerts go to the console");
            Arc::new(ConsoleNotifier::new())
        }
    }
}
