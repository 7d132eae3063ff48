//! What a missing survey answer contributes to a score.
//!
//! Unreadable or blank fields never abort scoring. Each one is replaced by a
//! contribution chosen by the active [`MissingValuePolicy`], so partial
//! records still produce a complete, in-range score set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use somnus_core::models::report::COMPONENT_MAX;
use ts_rs::TS;

/// Highest value of a single ordinal survey rating.
pub const RATING_MAX: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MissingValuePolicy {
    /// Missing inputs contribute the minimum (0).
    #[default]
    Lenient,
    /// Missing inputs contribute the maximum, as if the answer were worst-case.
    Pessimistic,
}

impl MissingValuePolicy {
    /// Contribution of a single 0–3 rating.
    pub fn rating(self, value: Option<u8>) -> u8 {
        value.unwrap_or(match self {
            Self::Lenient => 0,
            Self::Pessimistic => RATING_MAX,
        })
    }

    /// Component score used when a component's inputs cannot be read.
    pub fn component(self) -> u8 {
        match self {
            Self::Lenient => 0,
            Self::Pessimistic => COMPONENT_MAX,
        }
    }
}

impl fmt::Display for MissingValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Pessimistic => f.write_str("pessimistic"),
        }
    }
}

impl FromStr for MissingValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "pessimistic" => Ok(Self::Pessimistic),
            other => Err(format!("expected 'lenient' or 'pessimistic', got '{other}'")),
        }
    }
}
