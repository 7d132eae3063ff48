use crate::Instrument;
use crate::breakpoints::{ALL_TABLES, BreakpointTable};
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};

/// PSQI: Pittsburgh Sleep Quality Index.
/// Seven components, each rated 0–3. Global score 0–21; higher is worse.
pub struct Psqi;

impl Instrument for Psqi {
    fn id(&self) -> &str {
        "psqi"
    }

    fn name(&self) -> &str {
        "PSQI"
    }

    fn breakpoint_tables(&self) -> &[BreakpointTable] {
        &ALL_TABLES
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let component_range = ScoreRange {
                min: 0.0,
                max: 3.0,
                step: Some(1.0),
            };

            let components = [
                ("sleep_quality", "Subjective Sleep Quality", "Q6"),
                ("sleep_latency", "Sleep Latency", "Q2 bucketed + Q5a"),
                ("sleep_duration", "Sleep Duration", "Q4 in hours"),
                ("sleep_efficiency", "Habitual Sleep Efficiency", "Q4 / (Q3 - Q1)"),
                ("sleep_disturbances", "Sleep Disturbances", "sum of Q5b-Q5i"),
                ("medication_use", "Use of Sleeping Medication", "Q7"),
                ("daytime_dysfunction", "Daytime Dysfunction", "Q8 + Q9"),
            ];

            let subscales: Vec<Subscale> = components
                .iter()
                .map(|(id, name, source)| Subscale {
                    id: id.to_string(),
                    name: name.to_string(),
                    score_type: ScoreType::Rating,
                    range: component_range,
                    description: Some(source.to_string()),
                })
                .collect();

            vec![Domain {
                id: "psqi_components".to_string(),
                name: "PSQI Components".to_string(),
                subscales,
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: 21.0,
                    step: Some(1.0),
                }),
                description: Some("0-5: good sleep quality, 6+: poor sleep quality".to_string()),
            }]
        });
        &DOMAINS
    }
}
