//! Fuel-consuming car moving over the coordinate plane.

use crate::error::{DomainError, Result, non_negative};
use crate::point::Point;
use crate::round2;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Result of a [`Car::drive`] call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum DriveOutcome {
    /// Reached the destination, burning `fuel_used`.
    Arrived { fuel_used: f64 },
    /// Not enough fuel for the trip; location and fuel are unchanged.
    Stayed { fuel_needed: f64 },
}

impl DriveOutcome {
    #[must_use]
    pub fn arrived(&self) -> bool {
        matches!(self, Self::Arrived { .. })
    }
}

/// Car prototype with a fuel tank and a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    location: Point,
    fuel_capacity: f64,
    fuel_amount: f64,
    fuel_consumption: f64,
    model: String,
}

impl Car {
    /// Create a car with an empty tank.
    ///
    /// `fuel_consumption` is fuel burnt per unit of distance.
    pub fn new(
        fuel_capacity: f64,
        fuel_consumption: f64,
        location: Point,
        model: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            location,
            fuel_capacity: non_negative("fuel capacity", fuel_capacity)?,
            fuel_amount: 0.0,
            fuel_consumption: non_negative("fuel consumption", fuel_consumption)?,
            model: model.into(),
        })
    }

    /// Fuel needed to move from the current location to `destination`.
    #[must_use]
    pub fn compute_fuel_needed(&self, destination: &Point) -> f64 {
        self.location.distance(destination) * self.fuel_consumption
    }

    /// Move to `destination`, given either as a [`Point`] or an `(x, y)` pair.
    ///
    /// An empty tank is an error. A tank that holds some fuel, but not
    /// enough for the trip, leaves the car where it is and reports
    /// [`DriveOutcome::Stayed`].
    pub fn drive(&mut self, destination: impl Into<Point>) -> Result<DriveOutcome> {
        let destination = destination.into();

        if self.fuel_amount == 0.0 {
            return Err(DomainError::OutOfFuel);
        }

        let fuel_needed = self.compute_fuel_needed(&destination);
        if fuel_needed > self.fuel_amount {
            trace!(
                model = %self.model,
                fuel_needed,
                fuel_amount = self.fuel_amount,
                "not enough fuel, staying put"
            );
            return Ok(DriveOutcome::Stayed { fuel_needed });
        }

        self.fuel_amount -= fuel_needed;
        debug!(
            model = %self.model,
            from = %self.location,
            to = %destination,
            fuel_used = fuel_needed,
            "car moved"
        );
        self.location = destination;

        Ok(DriveOutcome::Arrived {
            fuel_used: fuel_needed,
        })
    }

    /// Add fuel to the tank. Asking for more than the tank can hold fails.
    pub fn refill(&mut self, amount: f64) -> Result<()> {
        let amount = non_negative("refill amount", amount)?;
        let headroom = self.fuel_headroom();

        if amount > headroom {
            return Err(DomainError::TooMuchFuel {
                requested: amount,
                headroom,
            });
        }

        self.fuel_amount = (self.fuel_amount + amount).min(self.fuel_capacity);
        debug!(model = %self.model, amount, fuel_amount = self.fuel_amount, "car refilled");
        Ok(())
    }

    /// Capacity minus current fuel amount
    #[must_use]
    pub fn fuel_headroom(&self) -> f64 {
        self.fuel_capacity - self.fuel_amount
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub fn fuel_amount(&self) -> f64 {
        self.fuel_amount
    }

    pub fn fuel_consumption(&self) -> f64 {
        self.fuel_consumption
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_location(&mut self, location: impl Into<Point>) {
        self.location = location.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }
}

impl Default for Car {
    fn default() -> Self {
        Self {
            location: Point::ORIGIN,
            fuel_capacity: 50.0,
            fuel_amount: 0.0,
            fuel_consumption: 0.6,
            model: "Trash".to_string(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car {} [fuel:{}/{}, location:{}]",
            self.model,
            round2(self.fuel_capacity),
            round2(self.fuel_amount),
            self.location
        )
    }
}
