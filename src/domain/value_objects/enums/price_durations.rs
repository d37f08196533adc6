use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Billing duration tags for OTT plan price variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriceDuration {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Display for PriceDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let duration = match self {
            PriceDuration::OneMonth => "1M",
            PriceDuration::ThreeMonths => "3M",
            PriceDuration::SixMonths => "6M",
            PriceDuration::OneYear => "1Y",
        };
        write!(f, "{}", duration)
    }
}
