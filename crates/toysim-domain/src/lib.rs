//! # Toy Simulation - Domain Model
//!
//! Value objects and entities for the toy simulation: a 2D [`Point`], a
//! fuel-burning [`Car`] and a combat [`Unit`]. These types are the single
//! source of truth for the runner crate.
//!
//! All state changes are synchronous, in-place mutations of owned fields.
//! Failures are reported through [`DomainError`].

#![forbid(unsafe_code)]

pub mod car;
pub mod error;
pub mod point;
pub mod unit;

pub use car::{Car, DriveOutcome};
pub use error::{DomainError, Result, UnitAction};
pub use point::Point;
pub use unit::{Exchange, Unit};

/// Round to two decimals for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(99.667), 99.67);
        assert_eq!(round2(9.699_999_999_999_999), 9.7);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(0.004), 0.0);
    }
}
