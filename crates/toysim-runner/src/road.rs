//! Road trip simulation: a single car driving through random waypoints.

use crate::config::RoadConfig;
use crate::error::Result;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use toysim_domain::{Car, DomainError, DriveOutcome, Point};
use tracing::{debug, info, warn};

/// How a single leg ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegStatus {
    Arrived,
    ArrivedAfterRefill,
    /// Farther than a full tank reaches; the car stayed where it was.
    Skipped,
}

/// Outcome of a single leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegReport {
    pub index: usize,
    pub from: Point,
    pub to: Point,
    pub fuel_needed: f64,
    pub status: LegStatus,
    pub fuel_after: f64,
}

/// Summary of a whole trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripReport {
    pub model: String,
    pub legs: Vec<LegReport>,
    pub fuel_used: f64,
    pub fuel_bought: f64,
    pub refills: u32,
    pub distance_travelled: f64,
    pub final_location: Point,
    pub final_state: String,
}

impl TripReport {
    pub fn skipped(&self) -> usize {
        self.legs
            .iter()
            .filter(|leg| leg.status == LegStatus::Skipped)
            .count()
    }
}

/// Drives a car through a list of waypoints, refuelling when it has to.
pub struct RoadTrip {
    car: Car,
    waypoints: Vec<Point>,
    fuel_bought: f64,
    refills: u32,
}

impl RoadTrip {
    /// Build a trip with `config.legs` random waypoints around the origin.
    pub fn new(config: &RoadConfig, rng: &mut impl Rng) -> Result<Self> {
        config.validate()?;
        let car = Car::new(
            config.fuel_capacity,
            config.fuel_consumption,
            Point::ORIGIN,
            config.model.clone(),
        )?;
        let waypoints = random_waypoints(rng, config.legs, config.radius);
        Ok(Self::with_waypoints(car, waypoints))
    }

    pub fn with_waypoints(car: Car, waypoints: Vec<Point>) -> Self {
        Self {
            car,
            waypoints,
            fuel_bought: 0.0,
            refills: 0,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Fill the tank up to capacity.
    fn refill_full(&mut self) -> Result<()> {
        let headroom = self.car.fuel_headroom();
        if headroom > 0.0 {
            self.car.refill(headroom)?;
            self.fuel_bought += headroom;
            self.refills += 1;
            debug!(amount = headroom, "refuelled");
        }
        Ok(())
    }

    fn drive_leg(&mut self, index: usize, to: Point) -> Result<LegReport> {
        let from = self.car.location();
        let fuel_needed = self.car.compute_fuel_needed(&to);

        let status = match self.car.drive(to) {
            Ok(DriveOutcome::Arrived { .. }) => LegStatus::Arrived,
            Ok(DriveOutcome::Stayed { .. }) | Err(DomainError::OutOfFuel) => {
                self.refill_full()?;
                match self.car.drive(to)? {
                    DriveOutcome::Arrived { .. } => LegStatus::ArrivedAfterRefill,
                    DriveOutcome::Stayed { .. } => LegStatus::Skipped,
                }
            }
            Err(err) => return Err(err.into()),
        };

        Ok(LegReport {
            index,
            from,
            to,
            fuel_needed,
            status,
            fuel_after: self.car.fuel_amount(),
        })
    }

    /// Drive every leg in order and summarize the trip.
    pub fn run(mut self) -> Result<TripReport> {
        let waypoints = std::mem::take(&mut self.waypoints);
        let mut legs = Vec::with_capacity(waypoints.len());
        let mut fuel_used = 0.0;
        let mut distance_travelled = 0.0;

        for (index, to) in waypoints.into_iter().enumerate() {
            let leg = self.drive_leg(index, to)?;

            match leg.status {
                LegStatus::Skipped => warn!(
                    "Leg {} skipped: {} -> {} needs {:.2} fuel, tank holds {}",
                    index + 1,
                    leg.from,
                    leg.to,
                    leg.fuel_needed,
                    self.car.fuel_capacity()
                ),
                status => {
                    fuel_used += leg.fuel_needed;
                    distance_travelled += leg.from.distance(&leg.to);
                    info!(
                        "Leg {} {:?}: {} -> {} | fuel used {:.2} | left {:.2}",
                        index + 1,
                        status,
                        leg.from,
                        leg.to,
                        leg.fuel_needed,
                        leg.fuel_after
                    );
                }
            }

            legs.push(leg);
        }

        Ok(TripReport {
            model: self.car.model().to_string(),
            legs,
            fuel_used,
            fuel_bought: self.fuel_bought,
            refills: self.refills,
            distance_travelled,
            final_location: self.car.location(),
            final_state: self.car.to_string(),
        })
    }
}

/// Scatter `count` waypoints within `radius` of the origin.
///
/// Distances cluster around 60% of the radius.
pub fn random_waypoints(rng: &mut impl Rng, count: usize, radius: f64) -> Vec<Point> {
    let spread = Normal::<f64>::new(0.6, 0.25).expect("constant normal parameters are valid");

    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let distance = radius * spread.sample(rng).clamp(0.0, 1.0);
            Point::new(distance * angle.cos(), distance * angle.sin())
        })
        .collect()
}
