//! spotwatch: live gold/silver spot price monitor
//!
//! This library provides the core components for:
//! - Rendering a script-heavy price page in a persistent headless browser
//! - Extracting the gold/silver quotations from the rendered DOM
//! - Publishing the latest snapshot to concurrent readers
//! - Once-per-process threshold alerts over email
//! - A small JSON read API for display and health checks

pub mod alert;
pub mod cli;
pub mod config;
pub mod extract;
pub mod monitor;
pub mod notify;
pub mod render;
pub mod server;
pub mod snapshot;
pub mod telemetry;
