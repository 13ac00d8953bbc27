use serde::Serialize;

use crate::error::{LandscapeError, Result};
use crate::geometry::{Domain, Point2};

/// Objective values on a regular grid.
///
/// `values` is row-major with one row per y sample and one column per x
/// sample, so `value(row, col) == f(x[col], y[row])`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampledField {
    domain: Domain,
    x: Vec<f64>,
    y: Vec<f64>,
    values: Vec<f64>,
}

impl SampledField {
    /// Evaluate `f` on a `resolution × resolution` grid spanning `domain`.
    pub fn sample<F>(domain: Domain, resolution: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(Point2) -> f64,
    {
        if resolution < 2 {
            return Err(LandscapeError::InvalidResolution(resolution));
        }

        let x = domain.x.linspace(resolution);
        let y = domain.y.linspace(resolution);
        let mut values = Vec::with_capacity(resolution * resolution);
        for &yi in &y {
            for &xj in &x {
                values.push(f(Point2::new(xj, yi)));
            }
        }

        Ok(Self {
            domain,
            x,
            y,
            values,
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x
    }

    pub fn y_axis(&self) -> &[f64] {
        &self.y
    }

    /// (rows, cols) = (y samples, x samples)
    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.x.len() + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.x.len())
    }

    /// Smallest and largest finite values, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Sample `f` over `[x_min, x_max] × [y_min, y_max]`.
pub fn evaluate_grid<F>(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    resolution: usize,
    f: F,
) -> Result<SampledField>
where
    F: FnMut(Point2) -> f64,
{
    let domain = Domain::new(x_min, x_max, y_min, y_max)?;
    SampledField::sample(domain, resolution, f)
}

/// Evaluate `f` at each point, in order.
pub fn evaluate_points<P, T, F>(points: &[P], f: F) -> Vec<T>
where
    P: Copy,
    F: FnMut(P) -> T,
{
    points.iter().copied().map(f).collect()
}
