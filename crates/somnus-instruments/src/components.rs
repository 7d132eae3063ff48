//! The seven PSQI component scores.
//!
//! Each component is a pure function of [`NormalizedFields`]. Missing inputs
//! never propagate: the configured [`MissingValuePolicy`] substitutes a
//! contribution, so every record yields seven scores in `[0, 3]`.

use jiff::SignedDuration;
use jiff::civil::Time;
use somnus_core::models::report::{COMPONENT_MAX, ComponentScores};

use crate::breakpoints::{
    DAYTIME_DYSFUNCTION_SUM, DISTURBANCE_SUM, LATENCY_MINUTES, LATENCY_SUM,
    SLEEP_DURATION_HOURS, SLEEP_EFFICIENCY_PERCENT,
};
use crate::config::ScoringConfig;
use crate::normalize::{NormalizedFields, Timeline};
use crate::policy::MissingValuePolicy;

fn hours(d: SignedDuration) -> f64 {
    d.as_secs_f64() / 3600.0
}

/// Sleep efficiency as a percentage of time in bed.
///
/// Returns `None` when wake does not come after bed on the timeline, which
/// the efficiency component scores as worst case.
pub fn sleep_efficiency_percent(
    timeline: &Timeline,
    bed: Time,
    wake: Time,
    sleep: SignedDuration,
) -> Option<f64> {
    let in_bed = timeline.time_in_bed(bed, wake);
    if in_bed <= SignedDuration::ZERO {
        return None;
    }
    Some(sleep.as_secs_f64() / in_bed.as_secs_f64() * 100.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentScoreCalculator {
    policy: MissingValuePolicy,
    timeline: Timeline,
}

impl ComponentScoreCalculator {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            policy: config.missing_policy,
            timeline: Timeline::new(config.reference_hour),
        }
    }

    pub fn policy(&self) -> MissingValuePolicy {
        self.policy
    }

    pub fn score(&self, fields: &NormalizedFields) -> ComponentScores {
        ComponentScores {
            sleep_quality: self.sleep_quality(fields),
            sleep_latency: self.sleep_latency(fields),
            sleep_duration: self.sleep_duration(fields),
            sleep_efficiency: self.sleep_efficiency(fields),
            sleep_disturbances: self.sleep_disturbances(fields),
            medication_use: self.medication_use(fields),
            daytime_dysfunction: self.daytime_dysfunction(fields),
        }
    }

    pub fn sleep_quality(&self, fields: &NormalizedFields) -> u8 {
        self.policy.rating(fields.sleep_quality)
    }

    /// Q2 minutes and Q5a are each bucketed to 0–3, then the sum is
    /// re-bucketed.
    pub fn sleep_latency(&self, fields: &NormalizedFields) -> u8 {
        let minutes_score = match fields.sleep_latency {
            Some(d) => LATENCY_MINUTES.bucket((d.as_secs_f64() / 60.0).round()),
            None => self.policy.rating(None),
        };
        let item_score = self.policy.rating(fields.trouble_falling_asleep);
        LATENCY_SUM.bucket(f64::from(minutes_score + item_score))
    }

    pub fn sleep_duration(&self, fields: &NormalizedFields) -> u8 {
        match fields.sleep_duration {
            Some(d) => SLEEP_DURATION_HOURS.bucket(hours(d)),
            None => self.policy.component(),
        }
    }

    pub fn sleep_efficiency(&self, fields: &NormalizedFields) -> u8 {
        let (Some(bed), Some(wake), Some(sleep)) =
            (fields.bed_time, fields.wake_time, fields.sleep_duration)
        else {
            return self.policy.component();
        };
        match sleep_efficiency_percent(&self.timeline, bed, wake, sleep) {
            Some(percent) => SLEEP_EFFICIENCY_PERCENT.bucket(percent),
            None => COMPONENT_MAX,
        }
    }

    pub fn sleep_disturbances(&self, fields: &NormalizedFields) -> u8 {
        let sum: u8 = fields
            .disturbances
            .iter()
            .map(|(_, v)| self.policy.rating(*v))
            .sum();
        DISTURBANCE_SUM.bucket(f64::from(sum))
    }

    pub fn medication_use(&self, fields: &NormalizedFields) -> u8 {
        self.policy.rating(fields.medication)
    }

    pub fn daytime_dysfunction(&self, fields: &NormalizedFields) -> u8 {
        let sum = self.policy.rating(fields.daytime_sleepiness)
            + self.policy.rating(fields.daytime_enthusiasm);
        DAYTIME_DYSFUNCTION_SUM.bucket(f64::from(sum))
    }
}
