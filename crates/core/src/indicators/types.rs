//! Indicator types

use serde::{Deserialize, Serialize};

/// Squares of the most recent move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub from: String,
    pub to: String,
}

impl LastMove {
    pub fn squares(&self) -> [&str; 2] {
        [self.from.as_str(), self.to.as_str()]
    }
}

/// The square of a king in check, and whether it is mated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIndicator {
    pub square: String,
    pub is_mate: bool,
}
