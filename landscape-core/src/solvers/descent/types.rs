use serde::{Deserialize, Serialize};

use crate::geometry::Point2;
use crate::solvers::SolverTraceRecord;

/// Configuration for fixed-step gradient descent.
///
/// There is no tolerance and no line search: the engine always performs
/// exactly `iterations` updates of size `step_size`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedStepDescent {
    /// Learning rate (gamma).
    pub step_size: f64,
    /// Number of updates to perform.
    pub iterations: usize,
    /// If true, per-iteration rows are logged at `info` instead of `debug`.
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the trajectory.
    pub collect_trace: bool,
}

impl FixedStepDescent {
    pub fn new(step_size: f64, iterations: usize) -> Self {
        Self {
            step_size,
            iterations,
            ..Self::default()
        }
    }
}

impl Default for FixedStepDescent {
    fn default() -> Self {
        Self {
            step_size: 1.0,
            iterations: 10,
            verbose: false,
            collect_trace: false,
        }
    }
}

/// A recorded iterate and its objective value at full precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Iterate {
    pub x: Point2,
    pub f: f64,
}

/// Final iterate of a run, optionally checked against a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DescentResult {
    pub x: Point2,
    pub f: f64,
    /// h(x) at the final iterate, when a reporting constraint was supplied.
    pub constraint: Option<f64>,
}

/// Ordered iterates of one descent run, `iterations + 1` entries long.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trajectory {
    pub(super) step_size: f64,
    pub(super) iterates: Vec<Iterate>,
    pub(super) trace: Option<Vec<SolverTraceRecord>>,
}

impl Trajectory {
    pub fn start(&self) -> Point2 {
        self.iterates[0].x
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of updates performed, i.e. `len() - 1`.
    pub fn iterations(&self) -> usize {
        self.iterates.len() - 1
    }

    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// Always false: the start point is recorded even for zero iterations.
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    pub fn iterates(&self) -> &[Iterate] {
        &self.iterates
    }

    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.iterates.iter().map(|it| it.x)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iterates.iter().map(|it| it.f)
    }

    pub fn last(&self) -> Iterate {
        self.iterates[self.iterates.len() - 1]
    }

    pub fn result(&self) -> DescentResult {
        let last = self.last();
        DescentResult {
            x: last.x,
            f: last.f,
            constraint: None,
        }
    }

    pub fn result_with_constraint<H>(&self, constraint: H) -> DescentResult
    where
        H: FnOnce(Point2) -> f64,
    {
        let last = self.last();
        DescentResult {
            x: last.x,
            f: last.f,
            constraint: Some(constraint(last.x)),
        }
    }

    /// Per-iteration diagnostics, present when `collect_trace` was set.
    pub fn trace(&self) -> Option<&[SolverTraceRecord]> {
        self.trace.as_deref()
    }
}
