//! Latest-snapshot publication
//!
//! One shared cell holding the most recently scraped prices. The monitor
//! loop is the only writer; API handlers and the console front end read it
//! concurrently.

mod store;
mod types;

pub use store::SnapshotStore;
pub use types::{MonitorStatus, Snapshot};
