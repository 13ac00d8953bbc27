//! Points, intervals and rectangular domains in the plane.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{LandscapeError, Result};

/// A point (or a gradient vector) in R^2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x1: f64,
    pub x2: f64,
}

impl Point2 {
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    pub fn norm(&self) -> f64 {
        self.x1.hypot(self.x2)
    }

    /// Component-wise rounding for display.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self::new(round_to(self.x1, decimals), round_to(self.x2, decimals))
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x1 + rhs.x1, self.x2 + rhs.x2)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x1 - rhs.x1, self.x2 - rhs.x2)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;

    fn mul(self, alpha: f64) -> Point2 {
        Point2::new(alpha * self.x1, alpha * self.x2)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x1, x2): (f64, f64)) -> Self {
        Self::new(x1, x2)
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        [p.x1, p.x2]
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x1, self.x2)
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

/// Closed interval `[min, max]` with `min < max`, both finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Self::checked(min, max, "x")
    }

    fn checked(min: f64, max: f64, axis: &'static str) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(LandscapeError::InvalidDomain { axis, min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// `n` uniformly spaced samples; the first is `min` and the last is `max`
    /// exactly.
    ///
    /// Samples are interpolated between the bounds rather than stepped from
    /// `min`, so `max - min` may exceed `f64::MAX`.
    pub fn linspace(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let last = (n - 1) as f64;
                let mut out: Vec<f64> = (0..n)
                    .map(|i| {
                        let t = i as f64 / last;
                        (1.0 - t) * self.min + t * self.max
                    })
                    .collect();
                out[n - 1] = self.max;
                out
            }
        }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = LandscapeError;

    fn try_from(v: [f64; 2]) -> Result<Self> {
        Self::new(v[0], v[1])
    }
}

impl From<Interval> for [f64; 2] {
    fn from(i: Interval) -> Self {
        i.as_array()
    }
}

/// Rectangular domain `x × y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x: Interval,
    pub y: Interval,
}

impl Domain {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        Ok(Self {
            x: Interval::checked(x_min, x_max, "x")?,
            y: Interval::checked(y_min, y_max, "y")?,
        })
    }
}
