use somnus_core::models::record::RawRecord;
use somnus_core::models::report::{ComponentScores, TOTAL_MAX};
use somnus_core::models::sort_spec::SortSpec;
use somnus_batch::{BatchScorer, score_batch};
use somnus_instruments::Instrument;
use somnus_instruments::config::ScoringConfig;
use somnus_instruments::instruments::psqi::Psqi;
use somnus_instruments::policy::MissingValuePolicy;
use somnus_instruments::scoring::ScoreEntry;

const EXTRACTED: &str = r#"[
  {
    "id": "001", "name": "李四", "age": 52,
    "bed_time": "23:30", "sleep_latency": "30", "wake_time": "6:30", "sleep_duration": 6,
    "trouble_falling_asleep": 2,
    "night_waking": 1, "bathroom": 2, "breathing": 0, "cough_snore": 1,
    "too_cold": 0, "too_hot": 0, "bad_dreams": 1, "pain": 0,
    "sleep_quality": 2, "medication": 0, "daytime_sleepiness": 1, "daytime_enthusiasm": 2
  },
  {
    "id": "002", "name": "张三", "age": "28",
    "bed_time": "22:45", "sleep_latency": "10分钟", "wake_time": "07:00", "sleep_duration": "8小时",
    "trouble_falling_asleep": "0",
    "night_waking": "0", "bathroom": "1", "breathing": "0", "cough_snore": "0",
    "too_cold": "0", "too_hot": "0", "bad_dreams": "0", "pain": "0",
    "sleep_quality": "0", "medication": "0", "daytime_sleepiness": "0", "daytime_enthusiasm": "1"
  },
  {
    "id": "003", "name": "王五", "age": null,
    "bed_time": "凌晨1点", "sleep_latency": "约1小时", "wake_time": "6点", "sleep_duration": "4",
    "trouble_falling_asleep": "3",
    "night_waking": "3", "bathroom": "3", "breathing": "2", "cough_snore": "3",
    "too_cold": "2", "too_hot": "1", "bad_dreams": "3", "pain": "3",
    "sleep_quality": "3", "medication": "2", "daytime_sleepiness": "3", "daytime_enthusiasm": "3"
  }
]"#;

fn extracted() -> Vec<RawRecord> {
    serde_json::from_str(EXTRACTED).unwrap()
}

#[test]
fn scores_extracted_records_in_input_order() {
    let reports = score_batch(&extracted());
    let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["001", "002", "003"]);

    assert_eq!(
        reports[0].scores,
        ComponentScores {
            sleep_quality: 2,
            sleep_latency: 2,
            sleep_duration: 1,
            sleep_efficiency: 0,
            sleep_disturbances: 1,
            medication_use: 0,
            daytime_dysfunction: 2,
        }
    );
    assert_eq!(reports[0].total, 8);
    assert_eq!(reports[0].age, "52");

    assert_eq!(reports[1].total, 2);
    assert!(reports[1].missing_fields.is_empty());

    // 01:00 to 06:00 is five hours in bed for four hours asleep: 80%.
    assert_eq!(reports[2].scores.sleep_efficiency, 1);
    assert_eq!(reports[2].scores.sleep_duration, 3);
    assert_eq!(reports[2].scores.sleep_latency, 3);
    assert_eq!(reports[2].scores.sleep_disturbances, 3);
    assert_eq!(reports[2].total, 18);
    assert_eq!(reports[2].age, "");
}

#[test]
fn empty_batch_yields_empty_output() {
    assert!(score_batch(&[]).is_empty());
    let scorer = BatchScorer::default();
    assert!(
        scorer
            .score_batch_ordered(&[], Some(&SortSpec::from(["张三"])))
            .is_empty()
    );
}

#[test]
fn blank_record_scores_zero_and_reports_every_field_missing() {
    let record = RawRecord {
        id: "blank".to_string(),
        ..Default::default()
    };
    let reports = score_batch(&[record]);

    assert_eq!(reports[0].scores, ComponentScores::default());
    assert_eq!(reports[0].total, 0);
    assert_eq!(reports[0].missing_fields.len(), 17);
}

#[test]
fn totals_match_component_sums() {
    for config in [
        ScoringConfig::default(),
        ScoringConfig {
            missing_policy: MissingValuePolicy::Pessimistic,
            ..Default::default()
        },
    ] {
        let mut records = extracted();
        records.push(RawRecord::default());
        for report in BatchScorer::new(config).score_batch(&records) {
            let entries = ScoreEntry::from_components(&report.scores);
            assert!(Psqi.validate_scores(&entries).is_empty());
            assert!(Psqi.validate_total(f64::from(report.total)).is_none());
            assert_eq!(report.total, report.scores.total());
            assert!(report.total <= TOTAL_MAX);
        }
    }
}

#[test]
fn parallel_and_sequential_scoring_agree() {
    let records: Vec<RawRecord> = extracted().into_iter().cycle().take(60).collect();

    let parallel = BatchScorer::new(ScoringConfig::default()).score_batch(&records);
    let sequential = BatchScorer::new(ScoringConfig {
        parallel: false,
        ..Default::default()
    })
    .score_batch(&records);

    assert_eq!(parallel, sequential);
}

#[test]
fn scoring_is_idempotent() {
    let records = extracted();
    let scorer = BatchScorer::default();
    assert_eq!(scorer.score_batch(&records), scorer.score_batch(&records));
    assert_eq!(scorer.score_record(&records[0]), scorer.score_record(&records[0]));
}

#[test]
fn duplicate_ids_are_scored_independently() {
    let mut records = extracted();
    records[1].id = "001".to_string();

    let reports = score_batch(&records);
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].id, reports[1].id);
    assert_ne!(reports[0].total, reports[1].total);
}

#[test]
fn sort_spec_reorders_after_scoring() {
    let scorer = BatchScorer::default();
    let spec = SortSpec::from(["张 三", "王五"]);

    let reports = scorer.score_batch_ordered(&extracted(), Some(&spec));
    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["张三", "王五", "李四"]);

    let unordered = scorer.score_batch_ordered(&extracted(), None);
    assert_eq!(unordered, scorer.score_batch(&extracted()));
}

#[test]
fn numeric_json_answers_score_as_written_or_go_missing() {
    let json = r#"[{ "id": "n1", "name": "王五", "sleep_quality": 2.0, "bed_time": 23.30, "wake_time": 7 }]"#;
    let records: Vec<RawRecord> = serde_json::from_str(json).unwrap();
    let report = &score_batch(&records)[0];

    assert_eq!(report.scores.sleep_quality, 2);
    assert!(!report.missing_fields.iter().any(|f| f == "sleep_quality"));
    // 23.30 loses its trailing zero in JSON and cannot be told from 23:03.
    assert!(report.missing_fields.iter().any(|f| f == "bed_time"));
    assert!(!report.missing_fields.iter().any(|f| f == "wake_time"));
}
