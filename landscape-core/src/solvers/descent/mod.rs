mod solve;
mod types;

pub use solve::{iterations_from_signed, run};
pub use types::{DescentResult, FixedStepDescent, Iterate, Trajectory};
