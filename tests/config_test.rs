use serial_test::serial;
use smarttrip_planner::config::{ConfigError, PlannerConfig};
use std::env;

const LIMIT_VAR: &str = "SMARTTRIP_RECENT_TRIPS_LIMIT";
const PRETTY_VAR: &str = "SMARTTRIP_PRETTY_JSON";

fn reset_env() {
    env::remove_var(LIMIT_VAR);
    env::remove_var(PRETTY_VAR);
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    reset_env();

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.recent_trips_limit, 3);
    assert!(config.pretty_json);
}

#[test]
#[serial]
fn test_overrides_from_env() {
    reset_env();
    env::set_var(LIMIT_VAR, " 5 ");
    env::set_var(PRETTY_VAR, "Off");

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.recent_trips_limit, 5);
    assert!(!config.pretty_json);

    reset_env();
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    reset_env();
    env::set_var(LIMIT_VAR, "three");

    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: LIMIT_VAR.to_string(),
            value: "three".to_string(),
        }
    );

    reset_env();
    env::set_var(PRETTY_VAR, "maybe");
    let err = PlannerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains(PRETTY_VAR));

    reset_env();
}
