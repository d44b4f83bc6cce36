//! Snapshot record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Monitor status as exposed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorStatus {
    /// Browser session not yet acquired, no cycle has completed
    Initializing,
    /// Last cycle fetched both prices
    Success,
    /// Last cycle failed; prices are from the last successful cycle
    Error,
    /// Monitor terminated; no further cycles will run this process
    FatalError,
}

/// The latest published price record
///
/// Prices are kept as the display strings shown on the source page,
/// currency symbol and separators included; the page's formatting is part of
/// what users see. Threshold comparison derives a numeric view separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub gold_price: Option<String>,
    pub silver_price: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub status: MonitorStatus,
}

impl Snapshot {
    /// The record published before the first cycle completes
    pub fn initializing() -> Self {
        Self {
            gold_price: None,
            silver_price: None,
            last_updated: None,
            status: MonitorStatus::Initializing,
        }
    }

    /// A successful cycle's record
    pub fn success(gold_price: String, silver_price: String, at: DateTime<Utc>) -> Self {
        Self {
            gold_price: Some(gold_price),
            silver_price: Some(silver_price),
            last_updated: Some(at),
            status: MonitorStatus::Success,
        }
    }
}
