use std::env;
use thiserror::Error;

const DEFAULT_RECENT_TRIPS_LIMIT: usize = 3;
const DEFAULT_PRETTY_JSON: bool = true;

const RECENT_TRIPS_LIMIT_VAR: &str = "SMARTTRIP_RECENT_TRIPS_LIMIT";
const PRETTY_JSON_VAR: &str = "SMARTTRIP_PRETTY_JSON";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// How many upcoming trips the home view shows
    pub recent_trips_limit: usize,
    pub pretty_json: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            recent_trips_limit: DEFAULT_RECENT_TRIPS_LIMIT,
            pretty_json: DEFAULT_PRETTY_JSON,
        }
    }
}

impl PlannerConfig {
    /// Read overrides from the environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let recent_trips_limit = match env::var(RECENT_TRIPS_LIMIT_VAR) {
            Ok(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid(RECENT_TRIPS_LIMIT_VAR, &value))?,
            Err(_) => defaults.recent_trips_limit,
        };

        let pretty_json = match env::var(PRETTY_JSON_VAR) {
            Ok(value) => parse_flag(&value).ok_or_else(|| invalid(PRETTY_JSON_VAR, &value))?,
            Err(_) => defaults.pretty_json,
        };

        Ok(Self {
            recent_trips_limit,
            pretty_json,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
