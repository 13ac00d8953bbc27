mod grid;

pub use grid::{evaluate_grid, evaluate_points, SampledField};
