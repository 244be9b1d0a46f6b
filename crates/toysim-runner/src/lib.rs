//! # Toy Simulation Runner
//!
//! Scenario runner for the toy simulation domain.
//!
//! ## Features
//!
//! - Road trips: a car driving through random waypoints, refuelling on the way
//! - Duels: two units trading attacks and counter-attacks
//! - Seeded randomness for reproducible runs
//! - Text and JSON reports

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod arena;
pub mod config;
pub mod error;
pub mod road;

pub use arena::{Arena, DuelReport};
pub use config::RunnerConfig;
pub use error::{Result, RunnerError};
pub use road::{RoadTrip, TripReport};

use serde::Serialize;

/// Everything a single run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub seed: u64,
    pub trip: TripReport,
    pub duel: DuelReport,
}

impl ScenarioReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the road trip and the duel with a generator seeded from `seed`.
pub fn run_scenario(config: &RunnerConfig, seed: u64) -> Result<ScenarioReport> {
    use rand::SeedableRng;

    config.validate()?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let trip = RoadTrip::new(&config.road, &mut rng)?.run()?;
    let duel = Arena::random(&mut rng, &config.arena, "Drozd", "Grach")?.run()?;

    Ok(ScenarioReport { seed, trip, duel })
}
