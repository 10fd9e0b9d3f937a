use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Cartesian position in board-radius units.
///
/// `x` grows to the right and `y` grows downwards, so the top of the board
/// (the 20 sector) sits at negative `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Distance from the board centre.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).norm()
    }

    pub fn to_polar(self) -> PolarPoint {
        PolarPoint::from_cartesian(self)
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

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Polar position: `angle` is measured clockwise from the top of the board,
/// `radius` is a fraction of the board radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    angle: f64,
    radius: f64,
}

impl PolarPoint {
    /// Builds a polar point, folding the angle into `[0, 2π)`.
    pub fn new(angle: f64, radius: f64) -> Self {
        // rem_euclid rounds tiny negative angles up to exactly TAU.
        let angle = angle.rem_euclid(TAU);
        Self {
            angle: if angle >= TAU { 0.0 } else { angle },
            radius,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn to_cartesian(&self) -> Point {
        Point::new(
            self.radius * self.angle.sin(),
            -self.radius * self.angle.cos(),
        )
    }

    pub fn from_cartesian(point: Point) -> Self {
        Self::new(point.x.atan2(-point.y), point.norm())
    }
}
