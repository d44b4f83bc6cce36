//! Threshold alerting
//!
//! Stateful, once-per-process gates that email when a price drops below its
//! configured threshold. A gate starts armed and disarms permanently on the
//! first successful send; a failed send leaves it armed so the next cycle
//! retries.

mod gate;
mod types;

pub use gate::{parse_display_price, AlertSet, ThresholdAlert};
pub use types::Commodity;
