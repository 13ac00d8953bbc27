use pyo3::prelude::*;

mod bindings;
mod logging;

/// Python module definition
#[pymodule]
fn descent_landscape(m: &Bound<PyModule>) -> PyResult<()> {
    logging::init();
    bindings::descent::register(m)?;
    bindings::sampling::register(m)?;
    bindings::view::register(m)?;
    Ok(())
}
