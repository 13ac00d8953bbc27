//! Backend-neutral renderable layers.
//!
//! Every layer carries its coordinate arrays in data space plus the style it
//! was attached with. Turning layers into a concrete figure format is the job
//! of [`crate::view::export`].

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;
use crate::sampling::SampledField;

/// Style of a volumetric surface; no effect on sampling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    pub opacity: f64,
    pub show_scale: bool,
    pub color_scale: Option<String>,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            show_scale: true,
            color_scale: None,
        }
    }
}

/// What an overlay line stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LineRole {
    Trajectory,
    Constraint,
}

/// Connected 2-D polyline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline {
    pub role: LineRole,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Option<String>,
    /// Draw a marker at every vertex.
    pub markers: bool,
}

/// Connected 3-D polyline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline3d {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Layer {
    /// Line-only contour of a field.
    Contour(SampledField),
    Surface {
        field: SampledField,
        style: SurfaceStyle,
    },
    Line(Polyline),
    Line3d(Polyline3d),
}

impl Layer {
    pub fn kind(&self) -> &'static str {
        match self {
            Layer::Contour(_) => "contour",
            Layer::Surface { .. } => "surface",
            Layer::Line(_) => "line",
            Layer::Line3d(_) => "line3d",
        }
    }

    /// Overlay role; `None` for field renderings.
    pub fn role(&self) -> Option<LineRole> {
        match self {
            Layer::Line(line) => Some(line.role),
            Layer::Line3d(_) => Some(LineRole::Trajectory),
            Layer::Contour(_) | Layer::Surface { .. } => None,
        }
    }
}

/// Directed marker drawn in data coordinates, from `tail` to `head`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Arrow {
    pub tail: Point2,
    pub head: Point2,
    pub color: String,
}
