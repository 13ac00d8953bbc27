//! Classic teaching objectives with analytic gradients.

use crate::geometry::Point2;
use crate::problems::objective::Objective;

/// f(x) = x1^2 + x2^2
#[derive(Clone, Copy, Debug, Default)]
pub struct Paraboloid;

impl Objective for Paraboloid {
    fn value(&self, x: Point2) -> f64 {
        x.x1 * x.x1 + x.x2 * x.x2
    }

    fn gradient(&self, x: Point2) -> Point2 {
        Point2::new(2.0 * x.x1, 2.0 * x.x2)
    }
}

/// f(x) = (a - x1)^2 + b (x2 - x1^2)^2
#[derive(Clone, Copy, Debug)]
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

impl Objective for Rosenbrock {
    fn value(&self, x: Point2) -> f64 {
        let d = self.a - x.x1;
        let v = x.x2 - x.x1 * x.x1;
        d * d + self.b * v * v
    }

    fn gradient(&self, x: Point2) -> Point2 {
        let v = x.x2 - x.x1 * x.x1;
        Point2::new(
            -2.0 * (self.a - x.x1) - 4.0 * self.b * x.x1 * v,
            2.0 * self.b * v,
        )
    }
}

/// Boundary curve h(x) = x^3 + 9x^2 + 27x + 27, i.e. (x + 3)^3.
pub fn cubic_boundary(x: f64) -> f64 {
    x.powi(3) + 9.0 * x.powi(2) + 27.0 * x + 27.0
}

/// Residual of a point against [`cubic_boundary`]: h(x1) - x2.
pub fn cubic_boundary_residual(p: Point2) -> f64 {
    cubic_boundary(p.x1) - p.x2
}
