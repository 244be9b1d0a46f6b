//! Point on the coordinate plane.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A point on the coordinate plane, also used as a 2D vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// True iff both coordinates are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    #[test]
    fn test_truthiness() {
        assert!(Point::default().is_zero());
        assert!(Point::ORIGIN.is_zero());
        assert!(!Point::new(1.0, 5.0).is_zero());
        assert!(!Point::new(0.0, -0.5).is_zero());
    }

    #[test]
    fn test_operators() {
        let mut x = Point::new(1.0, 5.0);
        let y = Point::new(42.0, 17.7);
        let z = x;

        assert_ne!(x, y);
        assert_eq!(x, z);

        assert_eq!(x + y, Point::new(43.0, 5.0 + 17.7));
        assert_eq!(y - x, Point::new(41.0, 17.7 - 5.0));

        x += y;
        assert_eq!(x.x, 43.0);
        assert!((x.y - 22.7).abs() < 1e-12);

        x -= y;
        assert_eq!(x.x, z.x);
        assert!((x.y - z.y).abs() < 1e-12);
    }

    #[test]
    fn test_addition_is_componentwise() {
        for _ in 0..100 {
            let (x, y): (f64, f64) = ((-1e6..1e6).fake(), (-1e6..1e6).fake());
            let (a, b): (f64, f64) = ((-1e6..1e6).fake(), (-1e6..1e6).fake());

            let sum = Point::new(x, y) + Point::new(a, b);
            assert_eq!(sum, Point::new(x + a, y + b));
            assert_eq!(Point::new(x, y) - Point::new(a, b), Point::new(x - a, y - b));

            let mut p = Point::new(x, y);
            p += Point::new(a, b);
            assert_eq!(p, sum);
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Point::new(3.0, 42.0);
        let mut copy = original;
        copy.set_x(7.0);
        copy.set_y(-1.0);

        assert_eq!(original, Point::new(3.0, 42.0));
        assert_eq!(copy, Point::new(7.0, -1.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(1.5, 7.0);
        let b = Point::new(42.0, 7.0);
        assert_eq!(a.distance(&b), 40.5);
        assert_eq!(b.distance(&a), 40.5);
        assert_eq!(Point::ORIGIN.distance(&Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Point::from((4.0, 5.0)), Point::new(4.0, 5.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.0, 5.5).to_string(), "(1, 5.5)");
        assert_eq!(Point::new(2.0, 21.11).to_string(), "(2, 21.11)");
    }

    #[test]
    fn test_serialization() {
        let p = Point::new(1.5, -7.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-7.0}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
