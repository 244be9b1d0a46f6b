//! # Runner Configuration
//!
//! Environment-based configuration for the scenario runner. Command-line
//! flags in the binary override whatever is loaded here.

use crate::error::{Result, RunnerError};
use std::env;

/// Scenario runner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// RNG seed, random when unset
    pub seed: Option<u64>,

    /// Road trip configuration
    pub road: RoadConfig,

    /// Duel configuration
    pub arena: ArenaConfig,

    /// Logging level
    pub log_level: String,
}

/// Road trip configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RoadConfig {
    pub model: String,
    pub fuel_capacity: f64,
    pub fuel_consumption: f64,
    /// Number of waypoints to visit
    pub legs: usize,
    /// Waypoints are scattered within this distance of the origin
    pub radius: f64,
}

/// Duel configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    pub max_rounds: u32,
    pub min_hp: f64,
    pub max_hp: f64,
    pub min_damage: f64,
    pub max_damage: f64,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            model: "Trash".to_string(),
            fuel_capacity: 50.0,
            fuel_consumption: 0.6,
            legs: 10,
            radius: 30.0,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_rounds: 50,
            min_hp: 80.0,
            max_hp: 150.0,
            min_damage: 10.0,
            max_damage: 35.0,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let road_defaults = RoadConfig::default();
        let arena_defaults = ArenaConfig::default();

        Self {
            seed: lookup("TOYSIM_SEED").and_then(|v| v.parse().ok()),

            road: RoadConfig {
                model: lookup("TOYSIM_MODEL").unwrap_or_else(|| road_defaults.model.clone()),
                legs: lookup("TOYSIM_LEGS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(road_defaults.legs),
                radius: lookup("TOYSIM_RADIUS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(road_defaults.radius),
                ..road_defaults
            },

            arena: ArenaConfig {
                max_rounds: lookup("TOYSIM_MAX_ROUNDS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(arena_defaults.max_rounds),
                ..arena_defaults
            },

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Reject values the scenarios cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.road.validate()?;
        self.arena.validate()
    }
}

impl RoadConfig {
    /// Upper bound on waypoints per trip
    pub const MAX_LEGS: usize = 10_000;

    pub fn validate(&self) -> Result<()> {
        if self.legs == 0 || self.legs > Self::MAX_LEGS {
            return Err(RunnerError::InvalidConfig(format!(
                "legs must be within 1..={}, got {}",
                Self::MAX_LEGS,
                self.legs
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(RunnerError::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

impl ArenaConfig {
    /// Lowest hp bound; rolled hp is rounded to whole points.
    pub const MIN_HP: f64 = 1.0;

    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(RunnerError::InvalidConfig(
                "max rounds must be at least 1".into(),
            ));
        }
        // Written as negations so NaN bounds are rejected too.
        if !(self.min_hp >= Self::MIN_HP && self.min_hp <= self.max_hp && self.max_hp.is_finite()) {
            return Err(RunnerError::InvalidConfig(format!(
                "invalid hp range {}..{}",
                self.min_hp, self.max_hp
            )));
        }
        if !(self.min_damage >= 0.0
            && self.min_damage <= self.max_damage
            && self.max_damage.is_finite())
        {
            return Err(RunnerError::InvalidConfig(format!(
                "invalid damage range {}..{}",
                self.min_damage, self.max_damage
            )));
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> RunnerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        RunnerConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.seed, None);
        assert_eq!(config.road, RoadConfig::default());
        assert_eq!(config.arena, ArenaConfig::default());
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TOYSIM_SEED", "42"),
            ("TOYSIM_LEGS", "3"),
            ("TOYSIM_RADIUS", "12.5"),
            ("TOYSIM_MAX_ROUNDS", "7"),
            ("TOYSIM_MODEL", "Zpa"),
            ("LOG_LEVEL", "debug"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.road.legs, 3);
        assert_eq!(config.road.radius, 12.5);
        assert_eq!(config.road.model, "Zpa");
        assert_eq!(config.arena.max_rounds, 7);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = config_from(&[("TOYSIM_SEED", "abc"), ("TOYSIM_LEGS", "-1")]);
        assert_eq!(config.seed, None);
        assert_eq!(config.road.legs, RoadConfig::default().legs);
    }

    #[test]
    fn test_validate() {
        let mut config = config_from(&[]);
        config.road.legs = 0;
        assert!(matches!(config.validate(), Err(RunnerError::InvalidConfig(_))));

        let mut config = config_from(&[]);
        config.road.radius = -1.0;
        assert!(config.validate().is_err());

        let mut config = config_from(&[]);
        config.arena.max_rounds = 0;
        assert!(config.validate().is_err());

        let mut config = config_from(&[]);
        config.arena.min_hp = 500.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_caps_legs() {
        let mut road = RoadConfig::default();
        road.legs = RoadConfig::MAX_LEGS;
        assert!(road.validate().is_ok());

        road.legs = 1_000_000_000_000;
        assert!(matches!(road.validate(), Err(RunnerError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_arena_ranges() {
        let inverted = ArenaConfig {
            min_hp: 200.0,
            max_hp: 100.0,
            ..ArenaConfig::default()
        };
        assert!(inverted.validate().is_err());

        let below_one = ArenaConfig {
            min_hp: 0.2,
            max_hp: 0.4,
            ..ArenaConfig::default()
        };
        assert!(below_one.validate().is_err());

        let nan_hp = ArenaConfig {
            max_hp: f64::NAN,
            ..ArenaConfig::default()
        };
        assert!(nan_hp.validate().is_err());

        let nan_damage = ArenaConfig {
            min_damage: f64::NAN,
            ..ArenaConfig::default()
        };
        assert!(nan_damage.validate().is_err());

        let infinite_damage = ArenaConfig {
            max_damage: f64::INFINITY,
            ..ArenaConfig::default()
        };
        assert!(infinite_damage.validate().is_err());

        let inverted_damage = ArenaConfig {
            min_damage: 40.0,
            max_damage: 10.0,
            ..ArenaConfig::default()
        };
        assert!(inverted_damage.validate().is_err());

        assert!(ArenaConfig::default().validate().is_ok());
    }
}
