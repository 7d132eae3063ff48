//! somnus-batch
//!
//! Entry point for the surrounding application: score a batch of raw survey
//! records and optionally reorder the reports by a user's name list.
//!
//! Scoring is total. Unreadable fields are scored with the configured
//! missing-value policy (by default they contribute 0), and each report
//! lists those fields in `missing_fields`.

use std::collections::HashSet;

use rayon::prelude::*;
use somnus_core::models::record::RawRecord;
use somnus_core::models::report::ScoreReport;
use somnus_core::models::sort_spec::SortSpec;
use somnus_instruments::Instrument;
use somnus_instruments::components::ComponentScoreCalculator;
use somnus_instruments::config::ScoringConfig;
use somnus_instruments::instruments::psqi::Psqi;
use somnus_instruments::normalize::NormalizedFields;
use somnus_instruments::scoring::ScoreEntry;
use tracing::{debug, error, info};

pub use somnus_roster::reorder_by_names;

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchScorer {
    config: ScoringConfig,
    calculator: ComponentScoreCalculator,
}

impl BatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            calculator: ComponentScoreCalculator::new(&config),
        }
    }

    /// Score one record. Reads nothing but `record`.
    pub fn score_record(&self, record: &RawRecord) -> ScoreReport {
        let fields = NormalizedFields::from_record(record);
        let scores = self.calculator.score(&fields);

        let violations = Psqi.validate_scores(&ScoreEntry::from_components(&scores));
        for violation in &violations {
            error!(record_id = %record.id, %violation, "component score out of range");
        }
        if let Some(violation) = Psqi.validate_total(f64::from(scores.total())) {
            error!(record_id = %record.id, %violation, "total score out of range");
        }

        let report = ScoreReport::new(
            record.id.as_str(),
            record.name.as_str(),
            record.age.as_str(),
            scores,
            fields.missing_fields(),
        );
        debug!(
            record_id = %report.id,
            total = report.total,
            missing = report.missing_fields.len(),
            "scored record"
        );
        report
    }

    /// Score every record, preserving input order.
    pub fn score_batch(&self, records: &[RawRecord]) -> Vec<ScoreReport> {
        let distinct_ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        if distinct_ids.len() < records.len() {
            debug!(
                records = records.len(),
                distinct_ids = distinct_ids.len(),
                "batch contains repeated record ids"
            );
        }

        let reports: Vec<ScoreReport> = if self.config.parallel {
            records.par_iter().map(|r| self.score_record(r)).collect()
        } else {
            records.iter().map(|r| self.score_record(r)).collect()
        };

        info!(
            records = reports.len(),
            parallel = self.config.parallel,
            "scored batch"
        );
        reports
    }

    /// Score every record, then reorder by `sort_spec` when one is given.
    /// Reordering starts only after the whole batch is scored.
    pub fn score_batch_ordered(
        &self,
        records: &[RawRecord],
        sort_spec: Option<&SortSpec>,
    ) -> Vec<ScoreReport> {
        let reports = self.score_batch(records);
        match sort_spec {
            Some(spec) => reorder_by_names(reports, spec),
            None => reports,
        }
    }
}

/// Score a batch with the default configuration.
pub fn score_batch(records: &[RawRecord]) -> Vec<ScoreReport> {
    BatchScorer::default().score_batch(records)
}
