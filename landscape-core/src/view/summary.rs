use std::fmt;

use crate::geometry::{round_to, Point2};
use crate::solvers::descent::{DescentResult, Trajectory};

const DECIMALS: u32 = 3;

/// Title text for a descent run; every number rounded to 3 decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub start: Point2,
    pub step_size: f64,
    pub iterations: usize,
    pub result: DescentResult,
}

impl RunSummary {
    pub fn new(trajectory: &Trajectory, result: DescentResult) -> Self {
        Self {
            start: trajectory.start(),
            step_size: trajectory.step_size(),
            iterations: trajectory.iterations(),
            result,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x0={}, gamma={},<br> iterations={}, f(x)={}",
            self.start.rounded(DECIMALS),
            round_to(self.step_size, DECIMALS),
            self.iterations,
            round_to(self.result.f, DECIMALS),
        )?;
        match self.result.constraint {
            Some(h) => write!(
                f,
                ", h(x)={},<br> x={}",
                round_to(h, DECIMALS),
                self.result.x.rounded(DECIMALS)
            ),
            None => write!(f, ", x={}", self.result.x.rounded(DECIMALS)),
        }
    }
}
