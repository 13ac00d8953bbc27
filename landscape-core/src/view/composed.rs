use serde::Serialize;

use crate::geometry::{Interval, Point2};

use super::layer::{Arrow, Layer};
use super::panel::PanelLayout;

/// One side of a composed view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cell {
    /// Field rendering first, then overlays in attachment order.
    pub layers: Vec<Layer>,
    pub x_range: Interval,
}

/// Planar and volumetric panels side by side with a shared y-axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComposedView {
    pub layout: PanelLayout,
    pub shared_yaxes: bool,
    /// Range applied to the y-axis of both cells.
    pub y_range: Interval,
    /// Finite objective values across both fields; shared by the vertical
    /// scale of both cells.
    pub objective_range: Option<(f64, f64)>,
    pub planar: Cell,
    pub volumetric: Cell,
    pub annotations: Vec<Arrow>,
    /// Result carried over from the planar panel.
    pub result: Option<Point2>,
}

impl ComposedView {
    /// Number of cells in the layout grid (always one row of two).
    pub const CELLS: usize = 2;

    pub fn layer_count(&self) -> usize {
        self.planar.layers.len() + self.volumetric.layers.len()
    }
}
