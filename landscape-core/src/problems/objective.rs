use crate::geometry::Point2;

/// Objective function to be minimized over the plane.
///
/// Both methods are expected to be total over the domain they are called on.
/// Non-finite results are not trapped anywhere downstream.
pub trait Objective {
    /// Function value f(x) at x.
    fn value(&self, x: Point2) -> f64;

    /// Gradient ∇f(x) at x.
    fn gradient(&self, x: Point2) -> Point2;
}

impl<O: Objective + ?Sized> Objective for &O {
    fn value(&self, x: Point2) -> f64 {
        (**self).value(x)
    }

    fn gradient(&self, x: Point2) -> Point2 {
        (**self).gradient(x)
    }
}

/// Objective assembled from a value closure and a gradient closure.
#[derive(Clone, Copy, Debug)]
pub struct FnObjective<F, G> {
    value_fn: F,
    grad_fn: G,
}

impl<F, G> FnObjective<F, G>
where
    F: Fn(Point2) -> f64,
    G: Fn(Point2) -> Point2,
{
    pub fn new(value_fn: F, grad_fn: G) -> Self {
        Self { value_fn, grad_fn }
    }
}

impl<F, G> Objective for FnObjective<F, G>
where
    F: Fn(Point2) -> f64,
    G: Fn(Point2) -> Point2,
{
    fn value(&self, x: Point2) -> f64 {
        (self.value_fn)(x)
    }

    fn gradient(&self, x: Point2) -> Point2 {
        (self.grad_fn)(x)
    }
}
