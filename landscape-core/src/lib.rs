//! landscape: gradient descent on two-variable objectives, drawn over paired
//! contour and surface views.
//!
//! - `sampling`: regular-grid and point-wise evaluation of an objective
//! - `solvers::descent`: fixed-step gradient descent producing a `Trajectory`
//! - `view`: planar and volumetric `Panel`s, overlays, zoom and composition
//! - `view::export`: plotly-compatible JSON for the rendering side
//!
//! Everything runs on the calling thread; nothing here draws pixels.

pub mod config;
pub mod error;
pub mod geometry;
pub mod problems;
pub mod sampling;
pub mod solvers;
pub mod view;

pub use config::{Config, Lattice, ViewConfig};
pub use error::{LandscapeError, Result};
pub use geometry::{Domain, Interval, Point2};
pub use sampling::{evaluate_grid, evaluate_points, SampledField};
pub use solvers::descent::{FixedStepDescent, Trajectory};
pub use view::{ComposedView, Panel, ViewComposer};
