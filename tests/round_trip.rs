//! Property-based tests: a mapping written out in a supported format and
//! loaded back must equal the original.

use proptest::prelude::*;
use serde_json::{Map, Value};
use tempfile::TempDir;

use viper_config::load_config;

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").expect("Valid regex")
}

/// Values every format can represent
fn primitive_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::Bool),
        prop::string::string_regex("[a-zA-Z0-9 .-]{0,24}")
            .expect("Valid regex")
            .prop_map(Value::String),
    ]
}

fn mapping_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(key_strategy(), primitive_strategy(), 0..16)
        .prop_map(|entries| entries.into_iter().collect())
}

fn load_written(name: &str, content: &str) -> Map<String, Value> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    load_config(&path).expect("Failed to load written config")
}

proptest! {
    #[test]
    fn proptest_json_round_trip(mapping in mapping_strategy()) {
        let content = serde_json::to_string_pretty(&mapping).unwrap();
        prop_assert_eq!(load_written("config.json", &content), mapping);
    }

    #[test]
    fn proptest_json_round_trip_with_nulls(
        mapping in prop::collection::btree_map(key_strategy(), Just(Value::Null), 1..4)
    ) {
        let mapping: Map<String, Value> = mapping.into_iter().collect();
        let content = serde_json::to_string(&mapping).unwrap();
        prop_assert_eq!(load_written("config.json", &content), mapping);
    }

    #[test]
    fn proptest_toml_round_trip(mapping in mapping_strategy()) {
        let content = toml::to_string(&mapping).unwrap();
        prop_assert_eq!(load_written("config.toml", &content), mapping);
    }

    #[test]
    fn proptest_yaml_round_trip(mapping in mapping_strategy()) {
        let content = serde_yaml::to_string(&mapping).unwrap();
        prop_assert_eq!(load_written("config.yml", &content), mapping);
    }
}
