use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest value any single component may take.
pub const COMPONENT_MAX: u8 = 3;

/// Highest possible total: seven components at [`COMPONENT_MAX`].
pub const TOTAL_MAX: u8 = 7 * COMPONENT_MAX;

/// The seven PSQI component scores, each in `[0, 3]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentScores {
    pub sleep_quality: u8,
    pub sleep_latency: u8,
    pub sleep_duration: u8,
    pub sleep_efficiency: u8,
    pub sleep_disturbances: u8,
    pub medication_use: u8,
    pub daytime_dysfunction: u8,
}

impl ComponentScores {
    /// Component ids paired with their values, in instrument order.
    pub fn entries(&self) -> [(&'static str, u8); 7] {
        [
            ("sleep_quality", self.sleep_quality),
            ("sleep_latency", self.sleep_latency),
            ("sleep_duration", self.sleep_duration),
            ("sleep_efficiency", self.sleep_efficiency),
            ("sleep_disturbances", self.sleep_disturbances),
            ("medication_use", self.medication_use),
            ("daytime_dysfunction", self.daytime_dysfunction),
        ]
    }

    /// Global score: the sum of all seven components, in `[0, 21]` whenever
    /// every component is in range.
    pub fn total(&self) -> u8 {
        self.entries().iter().map(|(_, v)| v).sum()
    }
}

/// One subject's scored result.
///
/// Built once per raw record and never mutated; batch ordering only moves
/// whole reports around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub id: String,
    pub name: String,
    pub age: String,
    pub scores: ComponentScores,
    pub total: u8,
    /// Survey fields that could not be read and were scored with the
    /// missing-value default.
    #[serde(default)]
    pub missing_fields: Vec<String>,
}

impl ScoreReport {
    /// Assemble a report. `total` is always derived from `scores`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        scores: ComponentScores,
        missing_fields: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
            total: scores.total(),
            scores,
            missing_fields,
        }
    }
}
