use landscape::evaluate_grid as sample_grid;
use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bindings::callbacks::{PyErrState, PyScalarCallback};
use crate::bindings::to_py_err;

type GridArrays<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray2<f64>>,
);

/// Sample `function([x1, x2])` on a regular grid.
///
/// Returns `(x, y, z)` with `z[i][j] = function([x[j], y[i]])`.
#[pyfunction(signature = (xmin, xmax, ymin, ymax, function, resolution = 100))]
fn evaluate_grid<'py>(
    py: Python<'py>,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    function: Py<PyAny>,
    resolution: usize,
) -> PyResult<GridArrays<'py>> {
    let err = PyErrState::default();
    let f = PyScalarCallback::borrowed(&function, &err);
    let field = sample_grid(xmin, xmax, ymin, ymax, resolution, |p| f.at_point(py, p))
        .map_err(to_py_err)?;
    err.check()?;

    let z: Vec<Vec<f64>> = field.rows().map(<[f64]>::to_vec).collect();
    let z = PyArray2::from_vec2(py, &z).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((
        field.x_axis().to_vec().into_pyarray(py),
        field.y_axis().to_vec().into_pyarray(py),
        z,
    ))
}

pub(crate) fn register(module: &Bound<PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(evaluate_grid, module)?)?;
    Ok(())
}
