use crate::error::{LandscapeError, Result};
use crate::geometry::Point2;
use crate::problems::objective::Objective;
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::{FixedStepDescent, Iterate, Trajectory};

impl FixedStepDescent {
    pub fn validate(&self) -> Result<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(LandscapeError::InvalidStepSize(self.step_size));
        }
        Ok(())
    }

    fn make_tracer(&self) -> SolverTracer {
        if self.collect_trace {
            SolverTracer::descent_with_history(self.step_size, self.verbose)
        } else {
            SolverTracer::descent(self.step_size, self.verbose)
        }
    }

    fn run_with_fn<F, G>(
        &self,
        mut x: Point2,
        mut value_fn: F,
        mut grad_fn: G,
        trace: &mut SolverTracer,
    ) -> Vec<Iterate>
    where
        F: FnMut(Point2) -> f64,
        G: FnMut(Point2) -> Point2,
    {
        let mut iterates = Vec::with_capacity(self.iterations + 1);
        let mut f = value_fn(x);
        iterates.push(Iterate { x, f });

        for k in 0..self.iterations {
            let grad = grad_fn(x);
            trace.emit(TraceRow::iter(k, x, f).grad_norm(grad.norm()));

            // x <- x - step_size * grad
            x = x - grad * self.step_size;
            f = value_fn(x);
            iterates.push(Iterate { x, f });
        }

        trace.emit(TraceRow::iter(self.iterations, x, f).note("final"));
        iterates
    }

    /// Run descent from `start` using value and gradient closures.
    pub fn run_fn<F, G>(&self, start: Point2, value_fn: F, grad_fn: G) -> Result<Trajectory>
    where
        F: FnMut(Point2) -> f64,
        G: FnMut(Point2) -> Point2,
    {
        self.validate()?;
        let mut trace = self.make_tracer();
        let iterates = self.run_with_fn(start, value_fn, grad_fn, &mut trace);
        Ok(Trajectory {
            step_size: self.step_size,
            iterates,
            trace: trace.into_history(),
        })
    }

    /// Run descent from `start` on an [`Objective`].
    pub fn run<O>(&self, obj: &O, start: Point2) -> Result<Trajectory>
    where
        O: Objective + ?Sized,
    {
        self.run_fn(start, |p| obj.value(p), |p| obj.gradient(p))
    }
}

/// Fixed-step descent with default diagnostics.
pub fn run<F, G>(
    start: Point2,
    f: F,
    grad_f: G,
    step_size: f64,
    iterations: usize,
) -> Result<Trajectory>
where
    F: FnMut(Point2) -> f64,
    G: FnMut(Point2) -> Point2,
{
    FixedStepDescent::new(step_size, iterations).run_fn(start, f, grad_f)
}

/// Iteration count from a signed source such as a scripting binding.
pub fn iterations_from_signed(iterations: i64) -> Result<usize> {
    usize::try_from(iterations).map_err(|_| LandscapeError::InvalidIterationCount(iterations))
}
