use crate::config::{Config, Lattice, ViewConfig};
use crate::error::{LandscapeError, Result};
use crate::geometry::{Domain, Point2};
use crate::sampling::{evaluate_points, SampledField};
use crate::solvers::descent::{DescentResult, Trajectory};

use super::composed::{Cell, ComposedView};
use super::layer::{Arrow, Layer, LineRole, Polyline, Polyline3d, SurfaceStyle};
use super::panel::{Panel, PanelKind, PanelLayout};
use super::summary::RunSummary;

const AXIS_TITLES: [&str; 3] = ["x1", "x2", "f(x)"];

/// Builds panels, attaches overlays and merges panels into a composed view.
///
/// Holds configuration only; every panel is owned by the caller.
#[derive(Clone, Debug, Default)]
pub struct ViewComposer {
    config: ViewConfig,
}

impl ViewComposer {
    pub fn new(config: ViewConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    fn panel_layout(&self) -> PanelLayout {
        PanelLayout {
            title: None,
            template: self.config.template.clone(),
            width: self.config.panel_width,
            height: self.config.panel_height,
            axis_titles: AXIS_TITLES,
        }
    }

    fn sample<F>(&self, domain: Domain, objective: F) -> Result<SampledField>
    where
        F: FnMut(Point2) -> f64,
    {
        tracing::debug!(
            x_min = domain.x.min(),
            x_max = domain.x.max(),
            y_min = domain.y.min(),
            y_max = domain.y.max(),
            resolution = self.config.resolution,
            "sampling objective"
        );
        SampledField::sample(domain, self.config.resolution, objective)
    }

    /// Line-contour panel of `objective` over `domain`.
    pub fn make_planar_panel<F>(&self, domain: Domain, objective: F) -> Result<Panel>
    where
        F: FnMut(Point2) -> f64,
    {
        let field = self.sample(domain, objective)?;
        Ok(Panel::new(PanelKind::Planar, field, self.panel_layout()))
    }

    /// Surface panel of `objective` over `domain`.
    pub fn make_volumetric_panel<F>(
        &self,
        domain: Domain,
        objective: F,
        style: SurfaceStyle,
    ) -> Result<Panel>
    where
        F: FnMut(Point2) -> f64,
    {
        let field = self.sample(domain, objective)?;
        Ok(Panel::new(
            PanelKind::Volumetric(style),
            field,
            self.panel_layout(),
        ))
    }

    /// Arrow from every lattice point `p` to `p + grad_f(p)`.
    ///
    /// The lattice is fixed and ignores the panel's domain; after a zoom some
    /// arrows may fall outside the visible range.
    pub fn attach_gradient_field<G>(&self, panel: &mut Panel, grad_f: G, lattice: &Lattice)
    where
        G: FnMut(Point2) -> Point2,
    {
        let tails: Vec<Point2> = lattice
            .points()
            .map(|(i, j)| Point2::new(f64::from(i), f64::from(j)))
            .collect();
        let grads = evaluate_points(&tails, grad_f);
        for (tail, grad) in tails.into_iter().zip(grads) {
            panel.push_annotation(Arrow {
                tail,
                head: tail + grad,
                color: self.config.arrow_color.clone(),
            });
        }
    }

    /// [`Self::attach_gradient_field`] on the configured lattice.
    pub fn attach_default_gradient_field<G>(&self, panel: &mut Panel, grad_f: G)
    where
        G: FnMut(Point2) -> Point2,
    {
        self.attach_gradient_field(panel, grad_f, &self.config.gradient_lattice);
    }

    /// Overlay a trajectory and record its final point as the panel result.
    ///
    /// Planar panels get a 2-D polyline with markers and a run summary
    /// title; volumetric panels get a 3-D polyline lifted by f(x).
    pub fn attach_trajectory(
        &self,
        panel: &mut Panel,
        trajectory: &Trajectory,
        color: Option<&str>,
    ) {
        self.attach_trajectory_with_result(panel, trajectory, color, trajectory.result());
    }

    /// Like [`Self::attach_trajectory`], also reporting h(x) at the result.
    pub fn attach_trajectory_with_constraint<H>(
        &self,
        panel: &mut Panel,
        trajectory: &Trajectory,
        color: Option<&str>,
        constraint: H,
    ) where
        H: FnOnce(Point2) -> f64,
    {
        let result = trajectory.result_with_constraint(constraint);
        self.attach_trajectory_with_result(panel, trajectory, color, result);
    }

    fn attach_trajectory_with_result(
        &self,
        panel: &mut Panel,
        trajectory: &Trajectory,
        color: Option<&str>,
        result: DescentResult,
    ) {
        let x: Vec<f64> = trajectory.points().map(|p| p.x1).collect();
        let y: Vec<f64> = trajectory.points().map(|p| p.x2).collect();
        let color = color.map(str::to_string);

        if panel.is_planar() {
            panel.set_overlay(Layer::Line(Polyline {
                role: LineRole::Trajectory,
                x,
                y,
                color,
                markers: true,
            }));
            panel.set_title(RunSummary::new(trajectory, result).to_string());
        } else {
            panel.set_overlay(Layer::Line3d(Polyline3d {
                x,
                y,
                z: trajectory.values().collect(),
                color,
            }));
        }
        panel.set_result(result.x);
    }

    /// Replace the panel's field with a fresh sample over `new_domain`.
    ///
    /// Overlays and annotations are kept as drawn. On error the panel is
    /// left untouched.
    pub fn zoom<F>(&self, panel: &mut Panel, new_domain: Domain, objective: F) -> Result<()>
    where
        F: FnMut(Point2) -> f64,
    {
        let field = self.sample(new_domain, objective)?;
        panel.replace_field(field);
        Ok(())
    }

    /// Overlay `y = h(x)` over the panel's x-range, dropping samples whose
    /// y falls outside the panel's y-range.
    pub fn attach_constraint_curve<H>(&self, panel: &mut Panel, h: H)
    where
        H: FnMut(f64) -> f64,
    {
        let domain = panel.domain();
        let xs = domain.x.linspace(self.config.constraint_samples);
        let ys = evaluate_points(&xs, h);
        let (x, y): (Vec<f64>, Vec<f64>) = xs
            .into_iter()
            .zip(ys)
            .filter(|&(_, y)| domain.y.contains(y))
            .unzip();
        tracing::trace!(
            kept = x.len(),
            dropped = self.config.constraint_samples - x.len(),
            "clipped constraint curve"
        );

        panel.set_overlay(Layer::Line(Polyline {
            role: LineRole::Constraint,
            x,
            y,
            color: Some(self.config.constraint_color.clone()),
            markers: false,
        }));
    }

    /// Place both panels side by side on a shared y-axis.
    ///
    /// The planar panel's title, template and annotations become the
    /// composed layout; the vertical range is the planar panel's y-range.
    ///
    /// Fails unless `planar` is a contour panel and `volumetric` a surface
    /// panel.
    pub fn compose(&self, planar: Panel, volumetric: Panel) -> Result<ComposedView> {
        if !planar.is_planar() || volumetric.is_planar() {
            return Err(LandscapeError::Config(format!(
                "compose expects a planar and a volumetric panel, got {} and {}",
                kind_name(&planar),
                kind_name(&volumetric)
            )));
        }

        let shared_y = planar.y_range();
        let planar_x = planar.x_range();
        let volumetric_x = volumetric.x_range();
        let objective_range = merge_ranges(
            planar.field().value_range(),
            volumetric.field().value_range(),
        );

        let (planar_layers, annotations, planar_layout, result) = planar.into_parts();
        let (volumetric_layers, _, _, _) = volumetric.into_parts();

        let layout = PanelLayout {
            width: self.config.composed_width,
            height: self.config.composed_height,
            ..planar_layout
        };

        Ok(ComposedView {
            layout,
            shared_yaxes: true,
            y_range: shared_y,
            objective_range,
            planar: Cell {
                layers: planar_layers,
                x_range: planar_x,
            },
            volumetric: Cell {
                layers: volumetric_layers,
                x_range: volumetric_x,
            },
            annotations,
            result,
        })
    }
}

fn kind_name(panel: &Panel) -> &'static str {
    if panel.is_planar() {
        "planar"
    } else {
        "volumetric"
    }
}

fn merge_ranges(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some((lo_a, hi_a)), Some((lo_b, hi_b))) => Some((lo_a.min(lo_b), hi_a.max(hi_b))),
        (one, None) | (None, one) => one,
    }
}
