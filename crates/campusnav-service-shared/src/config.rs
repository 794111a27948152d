//! Service configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `SERVICE_PORT`: HTTP port (default: 8080)
//! - `CAMPUSNAV_LAYOUT`: Coordinate layout for records without coordinates,
//!   `hashed` (default) or `random`
//! - `CAMPUSNAV_WALKING_SPEED`: Walking speed in distance units per second (default: 1.4)

use std::fmt;

use campusnav_lib::{CoordinateLayout, PlanOptions, SearchStrategy, DEFAULT_WALKING_SPEED};
use serde::Serialize;

/// Port used when `SERVICE_PORT` is unset.
pub const DEFAULT_SERVICE_PORT: u16 = 8080;

/// Runtime configuration for the pathfinding service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceConfig {
    /// HTTP port to bind.
    pub port: u16,
    /// Placement for records that carry no coordinates.
    pub layout: CoordinateLayout,
    /// Walking speed used for edge times and the estimated time.
    pub walking_speed: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVICE_PORT,
            layout: CoordinateLayout::default(),
            walking_speed: DEFAULT_WALKING_SPEED,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset or blank values fall back to the defaults; present but invalid
    /// values are reported rather than ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("SERVICE_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
                key: "SERVICE_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let layout = match get("CAMPUSNAV_LAYOUT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError {
                key: "CAMPUSNAV_LAYOUT",
                value: raw,
            })?,
            None => defaults.layout,
        };

        let walking_speed = match get("CAMPUSNAV_WALKING_SPEED") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|speed| speed.is_finite() && *speed > 0.0)
                .ok_or(ConfigError {
                    key: "CAMPUSNAV_WALKING_SPEED",
                    value: raw,
                })?,
            None => defaults.walking_speed,
        };

        Ok(Self {
            port,
            layout,
            walking_speed,
        })
    }

    /// Options handed to `plan_route` for every request.
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            layout: self.layout,
            walking_speed: self.walking_speed,
            strategy: SearchStrategy::Linear,
        }
    }
}

/// An environment variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value '{}' for {}", self.value, self.key)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.layout, CoordinateLayout::Hashed);
        assert_eq!(config.walking_speed, 1.4);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("SERVICE_PORT", "9000"),
            ("CAMPUSNAV_LAYOUT", "random"),
            ("CAMPUSNAV_WALKING_SPEED", "1.2"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.layout, CoordinateLayout::Random);
        assert_eq!(config.walking_speed, 1.2);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = ServiceConfig::from_lookup(lookup(&[("SERVICE_PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_SERVICE_PORT);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = ServiceConfig::from_lookup(lookup(&[("SERVICE_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.key, "SERVICE_PORT");

        let err =
            ServiceConfig::from_lookup(lookup(&[("CAMPUSNAV_LAYOUT", "spiral")])).unwrap_err();
        assert_eq!(err.key, "CAMPUSNAV_LAYOUT");

        let err = ServiceConfig::from_lookup(lookup(&[("CAMPUSNAV_WALKING_SPEED", "-1")]))
            .unwrap_err();
        assert!(err.to_string().contains("CAMPUSNAV_WALKING_SPEED"));
    }

    #[test]
    fn test_plan_options_follow_config() {
        let config = ServiceConfig {
            walking_speed: 2.0,
            ..ServiceConfig::default()
        };
        let options = config.plan_options();
        assert_eq!(options.walking_speed, 2.0);
        assert_eq!(options.layout, CoordinateLayout::Hashed);
    }
}
