use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::policy::MissingValuePolicy;

pub const ENV_MISSING_POLICY: &str = "SOMNUS_MISSING_POLICY";
pub const ENV_REFERENCE_HOUR: &str = "SOMNUS_REFERENCE_HOUR";
pub const ENV_PARALLEL: &str = "SOMNUS_PARALLEL";

/// Knobs for a scoring run. The defaults reproduce standard PSQI scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    #[serde(default)]
    pub missing_policy: MissingValuePolicy,
    /// Hour of day (0–23) at which the reference evening timeline starts.
    /// Clock times earlier than this are read as belonging to the next day.
    #[serde(default = "default_reference_hour")]
    pub reference_hour: u8,
    /// Score records on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_reference_hour() -> u8 {
    12
}

fn default_parallel() -> bool {
    true
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            missing_policy: MissingValuePolicy::default(),
            reference_hour: default_reference_hour(),
            parallel: default_parallel(),
        }
    }
}

impl ScoringConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, InstrumentError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`. Unset keys keep their defaults;
    /// set keys that fail to parse are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InstrumentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_MISSING_POLICY) {
            config.missing_policy = value.parse().map_err(|reason| InstrumentError::Config {
                key: ENV_MISSING_POLICY,
                value: value.clone(),
                reason,
            })?;
        }

        if let Some(value) = lookup(ENV_REFERENCE_HOUR) {
            config.reference_hour = value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|h| *h < 24)
                .ok_or_else(|| InstrumentError::Config {
                    key: ENV_REFERENCE_HOUR,
                    value: value.clone(),
                    reason: "expected an hour between 0 and 23".to_string(),
                })?;
        }

        if let Some(value) = lookup(ENV_PARALLEL) {
            config.parallel = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(InstrumentError::Config {
                        key: ENV_PARALLEL,
                        value,
                        reason: "expected true or false".to_string(),
                    });
                }
            };
        }

        tracing::debug!(
            missing_policy = %config.missing_policy,
            reference_hour = config.reference_hour,
            parallel = config.parallel,
            "scoring config loaded"
        );
        Ok(config)
    }
}
