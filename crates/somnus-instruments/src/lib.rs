//! somnus-instruments
//!
//! Sleep-survey instrument definitions and scoring. Pure data and pure
//! functions: raw survey text goes in, bounded component scores come out.

pub mod breakpoints;
pub mod components;
pub mod config;
pub mod error;
pub mod instruments;
pub mod normalize;
pub mod policy;
pub mod scoring;

use breakpoints::BreakpointTable;
use scoring::{Domain, ScoreEntry, ValidationError};

/// Trait implemented by each supported survey instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "psqi").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PSQI").
    fn name(&self) -> &str;

    /// The domains and subscales this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Lookup tables that turn raw answers into component scores, if the
    /// instrument uses any.
    fn breakpoint_tables(&self) -> &[BreakpointTable] {
        &[]
    }

    /// Validate a set of score entries against this instrument's rules.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Validate a composite total against each domain's composite range.
    fn validate_total(&self, total: f64) -> Option<ValidationError> {
        let domain = self.domains().iter().find(|d| d.composite_range.is_some())?;
        let range = domain.composite_range?;
        if range.contains(total) {
            return None;
        }
        Some(ValidationError {
            subscale_id: domain.id.clone(),
            value: total,
            expected_range: range,
            score_type: domain.composite_score_type.unwrap_or(scoring::ScoreType::Raw),
            message: format!(
                "{}: total {} is outside range [{}, {}]",
                self.name(),
                total,
                range.min,
                range.max,
            ),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::psqi::Psqi)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
