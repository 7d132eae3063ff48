use std::collections::HashMap;

use somnus_instruments::config::{
    ENV_MISSING_POLICY, ENV_PARALLEL, ENV_REFERENCE_HOUR, ScoringConfig,
};
use somnus_instruments::error::InstrumentError;
use somnus_instruments::policy::MissingValuePolicy;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn unset_keys_keep_defaults() {
    let config = ScoringConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ScoringConfig::default());
    assert_eq!(config.missing_policy, MissingValuePolicy::Lenient);
    assert_eq!(config.reference_hour, 12);
    assert!(config.parallel);
}

#[test]
fn overrides_are_applied() {
    let config = ScoringConfig::from_lookup(lookup(&[
        (ENV_MISSING_POLICY, "Pessimistic"),
        (ENV_REFERENCE_HOUR, "18"),
        (ENV_PARALLEL, "off"),
    ]))
    .unwrap();
    assert_eq!(config.missing_policy, MissingValuePolicy::Pessimistic);
    assert_eq!(config.reference_hour, 18);
    assert!(!config.parallel);
}

#[test]
fn invalid_values_are_config_errors() {
    for (key, value) in [
        (ENV_MISSING_POLICY, "strictish"),
        (ENV_REFERENCE_HOUR, "24"),
        (ENV_REFERENCE_HOUR, "noon"),
        (ENV_PARALLEL, "maybe"),
    ] {
        let err = ScoringConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
        match err {
            InstrumentError::Config { key: k, .. } => assert_eq!(k, key),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ScoringConfig =
        serde_json::from_str(r#"{ "missing_policy": "pessimistic" }"#).unwrap();
    assert_eq!(config.missing_policy, MissingValuePolicy::Pessimistic);
    assert_eq!(config.reference_hour, 12);
    assert!(config.parallel);
}
