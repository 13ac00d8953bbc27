use landscape::solvers::descent::{iterations_from_signed, FixedStepDescent, Trajectory};
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::bindings::callbacks::{
    point_from_vec, PyErrState, PyObjectiveCallbacks, PyScalarCallback,
};
use crate::bindings::to_py_err;
use crate::bindings::trace::trace_records_to_pylist;

/// Run fixed-step descent with Python callbacks.
///
/// Any Python exception raised by `f` or `grad` is re-raised once the run
/// returns.
pub(crate) fn run_descent(
    py: Python<'_>,
    function: Py<PyAny>,
    grad: Py<PyAny>,
    x0: &[f64],
    solver: &FixedStepDescent,
    err: &PyErrState,
) -> PyResult<Trajectory> {
    let start = point_from_vec(x0)?;
    let callbacks = PyObjectiveCallbacks::new(function, grad, err.clone());
    let trajectory = solver
        .run_fn(
            start,
            |x| callbacks.value(py, x),
            |x| callbacks.gradient(py, x),
        )
        .map_err(to_py_err)?;
    err.check()?;
    Ok(trajectory)
}

pub(crate) fn make_solver(gamma: f64, iterations: i64) -> PyResult<FixedStepDescent> {
    let iterations = iterations_from_signed(iterations).map_err(to_py_err)?;
    Ok(FixedStepDescent::new(gamma, iterations))
}

/// Fixed-step gradient descent exposed to Python.
///
/// f:          callable(x: list[float]) -> float
/// grad:       callable(x: list[float]) -> list[float] | ndarray
/// constraint: optional callable(x: list[float]) -> float, evaluated at the
///             final iterate
///
/// Returns a dict with `points` ((n+1) x 2), `values` (n+1), the final `x`
/// and `f`, `h` (or None) and `trace` (or None).
#[pyfunction(
    signature = (
        f,
        grad,
        x0,
        gamma = 1.0,
        iterations = 10,
        constraint = None,
        verbose = false,
        collect_trace = false
    )
)]
#[allow(clippy::too_many_arguments)]
fn gradient_descent(
    py: Python<'_>,
    f: Py<PyAny>,
    grad: Py<PyAny>,
    x0: Vec<f64>,
    gamma: f64,
    iterations: i64,
    constraint: Option<Py<PyAny>>,
    verbose: bool,
    collect_trace: bool,
) -> PyResult<Py<PyAny>> {
    let solver = FixedStepDescent {
        verbose,
        collect_trace,
        ..make_solver(gamma, iterations)?
    };
    let err = PyErrState::default();
    let trajectory = run_descent(py, f, grad, &x0, &solver, &err)?;

    let result = match &constraint {
        Some(h) => {
            let h = PyScalarCallback::borrowed(h, &err);
            trajectory.result_with_constraint(|x| h.at_point(py, x))
        }
        None => trajectory.result(),
    };
    err.check()?;

    let rows: Vec<Vec<f64>> = trajectory.points().map(|p| vec![p.x1, p.x2]).collect();
    let points =
        PyArray2::from_vec2(py, &rows).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let values: Vec<f64> = trajectory.values().collect();

    let out = PyDict::new(py);
    out.set_item("points", points)?;
    out.set_item("values", values.into_pyarray(py))?;
    out.set_item("x", vec![result.x.x1, result.x.x2])?;
    out.set_item("f", result.f)?;
    out.set_item("h", result.constraint)?;
    match trajectory.trace() {
        Some(records) => out.set_item("trace", trace_records_to_pylist(py, records)?)?,
        None => out.set_item("trace", py.None())?,
    }
    Ok(out.into_any().unbind())
}

pub(crate) fn register(module: &Bound<PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(gradient_descent, module)?)?;
    Ok(())
}
