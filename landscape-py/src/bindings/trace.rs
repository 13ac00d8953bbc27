use landscape::solvers::SolverTraceRecord;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

pub(crate) fn trace_records_to_pylist(
    py: Python<'_>,
    records: &[SolverTraceRecord],
) -> PyResult<Py<PyAny>> {
    let list = PyList::empty(py);
    for row in records {
        let d = PyDict::new(py);
        d.set_item("solver", row.solver)?;
        d.set_item("iter", row.iter)?;
        d.set_item("x", (row.x.x1, row.x.x2))?;
        d.set_item("f", row.f)?;
        d.set_item("grad_norm", row.grad_norm)?;
        d.set_item("step_size", row.step_size)?;
        d.set_item("note", row.note)?;
        list.append(d)?;
    }
    Ok(list.into_any().unbind())
}
