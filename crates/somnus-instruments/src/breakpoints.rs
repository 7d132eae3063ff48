//! Clinical breakpoint tables.
//!
//! Each table is a list of inclusive lower bounds in ascending order. A value
//! takes the score of the last bound it reaches; values below the first
//! bound take `below`. `NaN` never reaches a bound and also takes `below`.

use serde::Serialize;

/// Inclusive lower bound and the score it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    pub threshold: f64,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreakpointTable {
    pub name: &'static str,
    pub below: u8,
    pub steps: &'static [Breakpoint],
}

impl BreakpointTable {
    pub fn bucket(&self, value: f64) -> u8 {
        debug_assert!(
            self.steps.windows(2).all(|w| w[0].threshold < w[1].threshold),
            "{}: thresholds must be strictly ascending",
            self.name
        );
        self.steps
            .iter()
            .take_while(|b| value >= b.threshold)
            .last()
            .map_or(self.below, |b| b.score)
    }
}

const fn bp(threshold: f64, score: u8) -> Breakpoint {
    Breakpoint { threshold, score }
}

/// Q2 minutes (rounded): ≤15→0, 16–30→1, 31–60→2, >60→3.
pub const LATENCY_MINUTES: BreakpointTable = BreakpointTable {
    name: "latency_minutes",
    below: 0,
    steps: &[bp(16.0, 1), bp(31.0, 2), bp(61.0, 3)],
};

/// Q2 bucket + Q5a rating, 0–6: 0→0, 1–2→1, 3–4→2, 5–6→3.
pub const LATENCY_SUM: BreakpointTable = BreakpointTable {
    name: "latency_sum",
    below: 0,
    steps: &[bp(1.0, 1), bp(3.0, 2), bp(5.0, 3)],
};

/// Q4 hours: ≥7→0, [6,7)→1, [5,6)→2, <5→3.
pub const SLEEP_DURATION_HOURS: BreakpointTable = BreakpointTable {
    name: "sleep_duration_hours",
    below: 3,
    steps: &[bp(5.0, 2), bp(6.0, 1), bp(7.0, 0)],
};

/// Habitual efficiency percent: ≥85→0, [75,85)→1, [65,75)→2, <65→3.
pub const SLEEP_EFFICIENCY_PERCENT: BreakpointTable = BreakpointTable {
    name: "sleep_efficiency_percent",
    below: 3,
    steps: &[bp(65.0, 2), bp(75.0, 1), bp(85.0, 0)],
};

/// Sum of Q5b–Q5i, 0–24: 0→0, 1–9→1, 10–18→2, 19–24→3.
pub const DISTURBANCE_SUM: BreakpointTable = BreakpointTable {
    name: "disturbance_sum",
    below: 0,
    steps: &[bp(1.0, 1), bp(10.0, 2), bp(19.0, 3)],
};

/// Q8 + Q9, 0–6: 0→0, 1–2→1, 3–4→2, 5–6→3.
pub const DAYTIME_DYSFUNCTION_SUM: BreakpointTable = BreakpointTable {
    name: "daytime_dysfunction_sum",
    below: 0,
    steps: &[bp(1.0, 1), bp(3.0, 2), bp(5.0, 3)],
};

/// Every table, for auditing.
pub const ALL_TABLES: [BreakpointTable; 6] = [
    LATENCY_MINUTES,
    LATENCY_SUM,
    SLEEP_DURATION_HOURS,
    SLEEP_EFFICIENCY_PERCENT,
    DISTURBANCE_SUM,
    DAYTIME_DYSFUNCTION_SUM,
];
