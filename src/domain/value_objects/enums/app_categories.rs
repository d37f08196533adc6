use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppCategory {
    #[serde(rename = "premium")]
    Premium,
    #[default]
    #[serde(rename = "non-premium")]
    NonPremium,
}

impl Display for AppCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self {
            AppCategory::Premium => "premium",
            AppCategory::NonPremium => "non-premium",
        };
        write!(f, "{}", category)
    }
}

impl FromStr for AppCategory {
    type Err = String;

    /// Only the two wire names are accepted; anything else is a client error.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "premium" => Ok(AppCategory::Premium),
            "non-premium" => Ok(AppCategory::NonPremium),
            _ => Err(format!(
                "category must be 'premium' or 'non-premium', got '{value}'"
            )),
        }
    }
}
