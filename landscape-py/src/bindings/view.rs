use landscape::problems::test_functions::cubic_boundary;
use landscape::view::{Panel, SurfaceStyle};
use landscape::{Config, Domain, LandscapeError, Lattice, ViewComposer, ViewConfig};
use pyo3::prelude::*;

use crate::bindings::callbacks::{gradient_at, PyErrState, PyScalarCallback};
use crate::bindings::descent::{make_solver, run_descent};
use crate::bindings::to_py_err;

fn composer_from(config: Option<&str>) -> PyResult<ViewComposer> {
    let config = match config {
        Some(json) => ViewConfig::from_json_str(json).map_err(to_py_err)?,
        None => ViewConfig::default(),
    };
    ViewComposer::new(config).map_err(to_py_err)
}

/// One contour or surface panel with its overlays.
///
/// config: optional JSON object overriding `ViewConfig` fields, e.g.
///         '{"resolution": 50}'
#[pyclass(name = "Plot")]
pub(crate) struct PyPlot {
    composer: ViewComposer,
    panel: Panel,
}

impl PyPlot {
    /// Apply `edit` and keep the result only if neither the composer nor
    /// any Python callback failed.
    fn update<E>(&mut self, err: &PyErrState, edit: E) -> PyResult<()>
    where
        E: FnOnce(&ViewComposer, &mut Panel) -> Result<(), LandscapeError>,
    {
        let composer = &self.composer;
        self.panel.edit(|next| {
            edit(composer, next).map_err(to_py_err)?;
            err.check()
        })
    }
}

#[pymethods]
impl PyPlot {
    /// Line-contour panel of `function([x1, x2])`.
    #[staticmethod]
    #[pyo3(signature = (xmin, xmax, ymin, ymax, function, config = None))]
    fn contour(
        py: Python<'_>,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        function: Py<PyAny>,
        config: Option<&str>,
    ) -> PyResult<Self> {
        let composer = composer_from(config)?;
        let domain = Domain::new(xmin, xmax, ymin, ymax).map_err(to_py_err)?;
        let err = PyErrState::default();
        let f = PyScalarCallback::borrowed(&function, &err);
        let panel = composer
            .make_planar_panel(domain, |p| f.at_point(py, p))
            .map_err(to_py_err)?;
        err.check()?;
        Ok(Self { composer, panel })
    }

    /// Surface panel of `function([x1, x2])`.
    #[staticmethod]
    #[pyo3(signature = (
        xmin,
        xmax,
        ymin,
        ymax,
        function,
        opacity = 1.0,
        showscale = true,
        colorscale = None,
        config = None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn surface(
        py: Python<'_>,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        function: Py<PyAny>,
        opacity: f64,
        showscale: bool,
        colorscale: Option<String>,
        config: Option<&str>,
    ) -> PyResult<Self> {
        let composer = composer_from(config)?;
        let domain = Domain::new(xmin, xmax, ymin, ymax).map_err(to_py_err)?;
        let style = SurfaceStyle {
            opacity,
            show_scale: showscale,
            color_scale: colorscale,
        };
        let err = PyErrState::default();
        let f = PyScalarCallback::borrowed(&function, &err);
        let panel = composer
            .make_volumetric_panel(domain, |p| f.at_point(py, p), style)
            .map_err(to_py_err)?;
        err.check()?;
        Ok(Self { composer, panel })
    }

    /// Gradient arrows on an integer lattice; ranges are half-open
    /// `(start, end)` pairs and default to the configured lattice.
    #[pyo3(signature = (gradf, x_range = None, y_range = None))]
    fn add_gradients(
        &mut self,
        py: Python<'_>,
        gradf: Py<PyAny>,
        x_range: Option<(i32, i32)>,
        y_range: Option<(i32, i32)>,
    ) -> PyResult<()> {
        let default = &self.composer.config().gradient_lattice;
        let lattice = Lattice::new(
            x_range.map_or(default.x.clone(), |(a, b)| a..b),
            y_range.map_or(default.y.clone(), |(a, b)| a..b),
        );
        let err = PyErrState::default();
        self.update(&err, |composer, panel| {
            composer.attach_gradient_field(panel, |p| gradient_at(py, &gradf, &err, p), &lattice);
            Ok(())
        })
    }

    /// Run descent and overlay the trajectory; on a contour panel the title
    /// reports the run.
    #[pyo3(signature = (
        x0,
        function,
        grad,
        gamma = 1.0,
        iterations = 10,
        color = None,
        constraint = None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn add_gradient_descent(
        &mut self,
        py: Python<'_>,
        x0: Vec<f64>,
        function: Py<PyAny>,
        grad: Py<PyAny>,
        gamma: f64,
        iterations: i64,
        color: Option<String>,
        constraint: Option<Py<PyAny>>,
    ) -> PyResult<()> {
        let solver = make_solver(gamma, iterations)?;
        let err = PyErrState::default();
        let trajectory = run_descent(py, function, grad, &x0, &solver, &err)?;
        let color = color.as_deref();

        self.update(&err, |composer, panel| {
            match &constraint {
                Some(h) => {
                    let h = PyScalarCallback::borrowed(h, &err);
                    composer.attach_trajectory_with_constraint(panel, &trajectory, color, |x| {
                        h.at_point(py, x)
                    });
                }
                None => composer.attach_trajectory(panel, &trajectory, color),
            }
            Ok(())
        })
    }

    /// Overlay `y = h(x)` clipped to the panel's ranges; defaults to
    /// `x^3 + 9x^2 + 27x + 27`.
    #[pyo3(signature = (h = None))]
    fn add_h(&mut self, py: Python<'_>, h: Option<Py<PyAny>>) -> PyResult<()> {
        let err = PyErrState::default();
        self.update(&err, |composer, panel| {
            match &h {
                Some(h) => {
                    let h = PyScalarCallback::borrowed(h, &err);
                    composer.attach_constraint_curve(panel, |x| h.at(py, x));
                }
                None => composer.attach_constraint_curve(panel, cubic_boundary),
            }
            Ok(())
        })
    }

    /// Resample the field over a new domain, keeping every overlay.
    fn zoom(
        &mut self,
        py: Python<'_>,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        function: Py<PyAny>,
    ) -> PyResult<()> {
        let domain = Domain::new(xmin, xmax, ymin, ymax).map_err(to_py_err)?;
        let err = PyErrState::default();
        let f = PyScalarCallback::borrowed(&function, &err);
        self.update(&err, |composer, panel| {
            composer.zoom(panel, domain, |p| f.at_point(py, p))
        })
    }

    /// Final point of the last attached trajectory.
    #[getter]
    fn result(&self) -> Option<(f64, f64)> {
        self.panel.result().map(|p| (p.x1, p.x2))
    }

    #[getter]
    fn title(&self) -> Option<String> {
        self.panel.title().map(str::to_string)
    }

    #[getter]
    fn x_range(&self) -> (f64, f64) {
        let x = self.panel.x_range();
        (x.min(), x.max())
    }

    #[getter]
    fn y_range(&self) -> (f64, f64) {
        let y = self.panel.y_range();
        (y.min(), y.max())
    }

    /// Plotly figure JSON of this panel alone.
    fn to_json(&self) -> PyResult<String> {
        self.panel.to_json().map_err(to_py_err)
    }
}

/// Side-by-side figure JSON: contour panel left, surface panel right,
/// sharing the y-axis.
#[pyfunction]
fn show_plot(contour_plot: PyRef<'_, PyPlot>, surface_plot: PyRef<'_, PyPlot>) -> PyResult<String> {
    let view = contour_plot
        .composer
        .compose(contour_plot.panel.clone(), surface_plot.panel.clone())
        .map_err(to_py_err)?;
    view.to_json().map_err(to_py_err)
}

pub(crate) fn register(module: &Bound<PyModule>) -> PyResult<()> {
    module.add_class::<PyPlot>()?;
    module.add_function(wrap_pyfunction!(show_plot, module)?)?;
    Ok(())
}
