//! Threshold gate implementation

use super::Commodity;
use crate::config::AlertsConfig;
use crate::extract::PricePair;
use crate::notify::Notifier;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{info, warn};

/// Derive a numeric view from a display-string price
///
/// The page formats prices for humans ("₹9,150.00"); comparison needs a
/// number. Currency symbols and thousands separators are stripped; anything
/// left that still does not parse as a decimal yields `None`.
pub fn parse_display_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// One commodity's alert state: a threshold and whether it may still fire
#[derive(Debug)]
pub struct ThresholdAlert {
    commodity: Commodity,
    threshold: Decimal,
    armed: bool,
}

impl ThresholdAlert {
    pub fn new(commodity: Commodity, threshold: Decimal) -> Self {
        Self {
            commodity,
            threshold,
            armed: true,
        }
    }

    pub fn commodity(&self) -> Commodity {
        self.commodity
    }

    /// True until a notification for this commodity has been sent
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Evaluate the current price against the threshold
    ///
    /// Disarms only on a successful send; armed never transitions back.
    /// A price string that cannot be read numerically skips this cycle.
    pub async fn evaluate(&mut self, display_price: &str, recipient: &str, notifier: &dyn Notifier) {
        if !self.armed {
            return;
        }

        let Some(price) = parse_display_price(display_price) else {
            warn!(
                commodity = %self.commodity,
                raw = display_price,
                "price text is not numeric, skipping alert evaluation"
            );
            return;
        };

        if price >= self.threshold {
            return;
        }

        let subject = format!("{} Price Dropped!!", self.commodity.title());
        let body = format!(
            "<html>\n    <body>\n        <h2>{} Price Update</h2>\n        \
             <p>Current {} price: <strong>{}</strong></p>\n    </body>\n</html>",
            self.commodity.title(),
            self.commodity,
            display_price,
        );

        match notifier.notify(recipient, &subject, &body, true).await {
            Ok(()) => {
                self.armed = false;
                info!(
                    commodity = %self.commodity,
                    price = %price,
                    threshold = %self.threshold,
                    "threshold alert sent"
                );
            }
            Err(e) => {
                warn!(
                    commodity = %self.commodity,
                    error = %e,
                    "alert notification failed, will retry next cycle"
                );
            }
        }
    }
}

/// All configured gates plus the shared recipient
pub struct AlertSet {
    recipient: Option<String>,
    alerts: Vec<ThresholdAlert>,
}

impl AlertSet {
    /// Build gates from configuration
    ///
    /// A missing threshold disables that commodity's alert; a missing
    /// recipient disables alerting entirely. Neither is a startup fault.
    pub fn from_config(config: &AlertsConfig) -> Self {
        let mut alerts = Vec::new();

        match config.gold_threshold {
            Some(threshold) => alerts.push(ThresholdAlert::new(Commodity::Gold, threshold)),
            None => info!("no gold threshold configured, gold alerting disabled"),
        }
        match config.silver_threshold {
            Some(threshold) => alerts.push(ThresholdAlert::new(Commodity::Silver, threshold)),
            None => info!("no silver threshold configured, silver alerting disabled"),
        }

        if config.recipient.is_none() && !alerts.is_empty() {
            warn!("thresholds configured but no alert recipient set, alerting disabled");
        }

        Self {
            recipient: config.recipient.clone(),
            alerts,
        }
    }

    /// Run every armed gate against the latest prices
    pub async fn evaluate(&mut self, prices: &PricePair, notifier: &dyn Notifier) {
        let Some(recipient) = self.recipient.clone() else {
            return;
        };

        for alert in &mut self.alerts {
            let raw = match alert.commodity() {
                Commodity::Gold => &prices.gold,
                Commodity::Silver => &prices.silver,
            };
            alert.evaluate(raw, &recipient, notifier).await;
        }
    }

    #[cfg(test)]
    pub(crate) fn gates(&self) -> &[ThresholdAlert] {
        &self.alerts
    }
}
