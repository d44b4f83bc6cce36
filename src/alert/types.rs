//! Alert domain types

use std::fmt;

/// The two commodities quoted on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commodity {
    Gold,
    Silver,
}

impl Commodity {
    /// Capitalized name for email subjects and bodies
    pub fn title(&self) -> &'static str {
        match self {
            Commodity::Gold => "Gold",
            Commodity::Silver => "Silver",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commodity::Gold => write!(f, "gold"),
            Commodity::Silver => write!(f, "silver"),
        }
    }
}
