//! Tests for layered configuration loading.

use std::io::Write;

use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use serial_test::serial;

use crate::config::{parse_ranking, EvalConfig, OutputFormat, RandomConfig, DEFAULT_PRECISION};
use crate::error::Error;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_defaults() {
    let config = EvalConfig::default();
    assert_eq!(config.k, None);
    assert_eq!(config.precision, DEFAULT_PRECISION);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.random, RandomConfig::default());
    assert!(config.validate().is_ok());
    assert!(config.random.validate().is_ok());
}

#[test]
fn test_toml_overrides_defaults() {
    let figment = Figment::from(Serialized::defaults(EvalConfig::default())).merge(Toml::string(
        r#"
        k = 3
        format = "json"

        [random]
        seed = 42
        "#,
    ));

    let config = EvalConfig::from_figment(&figment).expect("valid config");
    assert_eq!(config.k, Some(3));
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.random.seed, Some(42));
    // Untouched keys keep their defaults.
    assert_eq!(config.precision, DEFAULT_PRECISION);
    assert_eq!(config.random.length, 5);
    assert_eq!(config.random.max_value, 10);
}

#[test]
#[serial]
fn test_load_from_file() {
    let file = write_config("precision = 6\n[random]\nlength = 3\nmax_value = 4\n");
    let config = EvalConfig::load(Some(file.path())).expect("load config");
    assert_eq!(config.precision, 6);
    assert_eq!(config.random.length, 3);
    assert_eq!(config.random.max_value, 4);
}

#[test]
#[serial]
fn test_load_missing_explicit_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = EvalConfig::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let file = write_config("k = 2\n[random]\nseed = 1\n");
    std::env::set_var("NDCG_K", "4");
    std::env::set_var("NDCG_RANDOM__SEED", "99");

    let result = EvalConfig::load(Some(file.path()));

    std::env::remove_var("NDCG_K");
    std::env::remove_var("NDCG_RANDOM__SEED");

    let config = result.expect("load config");
    assert_eq!(config.k, Some(4));
    assert_eq!(config.random.seed, Some(99));
}

#[test]
fn test_invalid_type_is_load_error() {
    let figment = Figment::from(Serialized::defaults(EvalConfig::default()))
        .merge(Toml::string("precision = \"many\""));
    let err = EvalConfig::from_figment(&figment).unwrap_err();
    assert!(matches!(err, Error::ConfigLoad(_)));
}

#[test]
fn test_validate_precision() {
    let config = EvalConfig {
        precision: 18,
        ..EvalConfig::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_validate_sample_bounds() {
    let mut random = RandomConfig {
        length: 11,
        max_value: 10,
        seed: None,
    };
    assert!(matches!(
        random.validate(),
        Err(Error::InvalidSample {
            length: 11,
            max_value: 10
        })
    ));

    random.length = 10;
    assert!(random.validate().is_ok());
}

#[test]
fn test_shared_validation_ignores_random_bounds() {
    let mut config = EvalConfig::default();
    config.random.max_value = 3;
    assert!(config.validate().is_ok());
    assert!(config.random.validate().is_err());
}

#[test]
#[serial]
fn test_load_keeps_out_of_range_random_settings() {
    let file = write_config("[random]\nlength = 5\nmax_value = 3\n");
    let config = EvalConfig::load(Some(file.path())).expect("load config");
    assert_eq!(config.random.max_value, 3);

    // A later override can bring the sample back in range.
    let mut random = config.random;
    random.max_value = 100;
    assert!(random.validate().is_ok());
}

#[test]
fn test_output_format_parse() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn test_parse_ranking() {
    assert_eq!(parse_ranking("1,2, 6 ,7,4").unwrap(), vec!["1", "2", "6", "7", "4"]);
    assert_eq!(parse_ranking("doc-a").unwrap(), vec!["doc-a"]);
    assert!(parse_ranking("   ").unwrap().is_empty());
}

#[test]
fn test_parse_ranking_rejects_blank_items() {
    let err = parse_ranking("1,,2").unwrap_err();
    assert!(matches!(err, Error::InvalidRanking(_)));
    assert!(err.to_string().contains("position 2"));
    assert!(parse_ranking("1,2,").is_err());
}

#[test]
fn test_to_toml_round_trips_through_figment() {
    let mut config = EvalConfig::default();
    config.k = Some(3);
    config.random.seed = Some(8);

    let rendered = config.to_toml().expect("render config");
    assert!(rendered.contains("k = 3"));
    assert!(rendered.contains("[random]"));

    let figment =
        Figment::from(Serialized::defaults(EvalConfig::default())).merge(Toml::string(&rendered));
    assert_eq!(EvalConfig::from_figment(&figment).unwrap(), config);
}
