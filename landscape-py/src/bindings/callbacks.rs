use landscape::geometry::Point2;
use numpy::IntoPyArray;
use numpy::PyArray1;
use numpy::{PyArrayMethods, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// First Python error raised inside a callback during one Rust call.
#[derive(Clone, Default)]
pub(crate) struct PyErrState {
    inner: Rc<RefCell<Option<PyErr>>>,
}

impl PyErrState {
    pub(crate) fn has_error(&self) -> bool {
        self.inner.borrow().is_some()
    }

    pub(crate) fn set_once(&self, err: PyErr) {
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    pub(crate) fn take(&self) -> Option<PyErr> {
        self.inner.borrow_mut().take()
    }

    /// Ok unless a callback failed.
    pub(crate) fn check(&self) -> PyResult<()> {
        match self.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn extract_vec1(py: Python<'_>, out: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(arr) = out.downcast::<PyArray1<f64>>() {
        let owned;
        let arr_c = if arr.is_contiguous() {
            arr
        } else {
            owned = arr.to_owned_array().into_pyarray(py);
            &owned
        };
        let slice = unsafe { arr_c.as_slice()? };
        return Ok(slice.to_vec());
    }

    out.extract::<Vec<f64>>()
}

pub(crate) fn point_from_vec(x: &[f64]) -> PyResult<Point2> {
    match x {
        [x1, x2] => Ok(Point2::new(*x1, *x2)),
        _ => Err(PyValueError::new_err(format!(
            "expected a point with 2 coordinates, got {}",
            x.len()
        ))),
    }
}

/// Python objective `f([x1, x2]) -> float` and gradient
/// `grad([x1, x2]) -> [g1, g2]`.
///
/// Non-finite values are passed through unchanged.
pub(crate) struct PyObjectiveCallbacks {
    value_fn: Py<PyAny>,
    grad_fn: Py<PyAny>,
    err: PyErrState,
}

impl PyObjectiveCallbacks {
    pub(crate) fn new(value_fn: Py<PyAny>, grad_fn: Py<PyAny>, err: PyErrState) -> Self {
        Self {
            value_fn,
            grad_fn,
            err,
        }
    }

    pub(crate) fn value(&self, py: Python<'_>, x: Point2) -> f64 {
        PyScalarCallback::borrowed(&self.value_fn, &self.err).at_point(py, x)
    }

    pub(crate) fn gradient(&self, py: Python<'_>, x: Point2) -> Point2 {
        gradient_at(py, &self.grad_fn, &self.err, x)
    }
}

pub(crate) fn gradient_at(
    py: Python<'_>,
    grad_fn: &Py<PyAny>,
    err: &PyErrState,
    x: Point2,
) -> Point2 {
    if err.has_error() {
        return Point2::default();
    }

    let result: PyResult<Vec<f64>> = (|| {
        let out = grad_fn.bind(py).call1((vec![x.x1, x.x2],))?;
        extract_vec1(py, &out)
    })();

    match result {
        Ok(g) if g.len() == 2 => Point2::new(g[0], g[1]),
        Ok(g) => {
            err.set_once(PyValueError::new_err(format!(
                "gradient length mismatch: expected 2, got {}",
                g.len()
            )));
            Point2::default()
        }
        Err(e) => {
            err.set_once(e);
            Point2::default()
        }
    }
}

/// Python callable returning one float.
pub(crate) struct PyScalarCallback<'a> {
    func: &'a Py<PyAny>,
    err: &'a PyErrState,
}

impl<'a> PyScalarCallback<'a> {
    pub(crate) fn borrowed(func: &'a Py<PyAny>, err: &'a PyErrState) -> Self {
        Self { func, err }
    }

    fn call<'py, A>(&self, py: Python<'py>, arg: A) -> f64
    where
        A: IntoPyObject<'py>,
    {
        if self.err.has_error() {
            return f64::NAN;
        }
        let out = self.func.bind(py).call1((arg,));
        match out.and_then(|v| v.extract::<f64>()) {
            Ok(v) => v,
            Err(e) => {
                self.err.set_once(e);
                f64::NAN
            }
        }
    }

    /// `func([x1, x2])`
    pub(crate) fn at_point(&self, py: Python<'_>, x: Point2) -> f64 {
        self.call(py, vec![x.x1, x.x2])
    }

    /// `func(x)`
    pub(crate) fn at(&self, py: Python<'_>, x: f64) -> f64 {
        self.call(py, x)
    }
}
