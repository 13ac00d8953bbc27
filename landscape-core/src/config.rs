//! JSON-loadable configuration for the descent engine and the view composer.

use std::ops::Range;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{LandscapeError, Result};
use crate::solvers::descent::FixedStepDescent;

/// Configuration loaded from JSON and checked before use.
pub trait Config: DeserializeOwned {
    fn validate(&self) -> Result<()>;

    /// Missing fields take their defaults.
    fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config for FixedStepDescent {
    fn validate(&self) -> Result<()> {
        FixedStepDescent::validate(self)
    }
}

/// Integer lattice for gradient arrows; half-open on both axes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    pub x: Range<i32>,
    pub y: Range<i32>,
}

impl Lattice {
    pub fn new(x: Range<i32>, y: Range<i32>) -> Self {
        Self { x, y }
    }

    /// Lattice points, x-major.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.x
            .clone()
            .flat_map(move |i| self.y.clone().map(move |j| (i, j)))
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new(-4..1, -2..3)
    }
}

/// Sampling density, figure sizes and colors used by the view composer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Samples per axis for contour and surface fields.
    pub resolution: usize,
    pub panel_width: u32,
    pub panel_height: u32,
    pub composed_width: u32,
    pub composed_height: u32,
    pub template: String,
    /// Samples along x when tracing a constraint curve.
    pub constraint_samples: usize,
    pub gradient_lattice: Lattice,
    pub arrow_color: String,
    pub constraint_color: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            resolution: 100,
            panel_width: 500,
            panel_height: 500,
            composed_width: 1000,
            composed_height: 500,
            template: "plotly_white".to_string(),
            constraint_samples: 1000,
            gradient_lattice: Lattice::default(),
            arrow_color: "red".to_string(),
            constraint_color: "#FF6692".to_string(),
        }
    }
}

impl Config for ViewConfig {
    fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(LandscapeError::InvalidResolution(self.resolution));
        }
        if self.constraint_samples < 2 {
            return Err(LandscapeError::Config(format!(
                "constraint_samples must be >= 2, got {}",
                self.constraint_samples
            )));
        }
        if self.panel_width == 0
            || self.panel_height == 0
            || self.composed_width == 0
            || self.composed_height == 0
        {
            return Err(LandscapeError::Config(
                "figure dimensions must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
