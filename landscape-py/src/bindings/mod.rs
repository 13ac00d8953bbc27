pub(crate) mod callbacks;
pub(crate) mod descent;
pub(crate) mod sampling;
pub(crate) mod trace;
pub(crate) mod view;

use landscape::LandscapeError;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub(crate) fn to_py_err(err: LandscapeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
