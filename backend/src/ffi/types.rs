//! Type conversion utilities for FFI boundary

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::models::state::OrbitState;
use crate::orchestrator::CycleResult;

fn state_to_py<'py>(py: Python<'py>, state: &OrbitState) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("x", state.x)?;
    dict.set_item("y", state.y)?;
    Ok(dict)
}

/// Convert a cycle result to a Python dict
pub fn cycle_result_to_py(py: Python, result: &CycleResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("iteration", result.iteration)?;
    dict.set_item("inflation_applied", result.inflation_applied)?;
    dict.set_item("expanded", state_to_py(py, &result.expanded)?)?;
    dict.set_item("inflated", state_to_py(py, &result.inflated)?)?;

    let expansion = PyDict::new(py);
    expansion.set_item("contraction", result.expansion.contraction)?;
    expansion.set_item("kinv", result.expansion.kinv)?;
    expansion.set_item("q", result.expansion.q)?;
    expansion.set_item("qratio", result.expansion.qratio)?;
    dict.set_item("expansion", expansion)?;

    let inflation = PyDict::new(py);
    inflation.set_item("inflation", result.inflation.inflation)?;
    inflation.set_item("kinv", result.inflation.kinv)?;
    dict.set_item("inflation", inflation)?;

    match &result.perturbation {
        Some(change) => {
            let perturbation = PyDict::new(py);
            perturbation.set_item("completed", change.completed)?;
            perturbation.set_item("inflation", change.inflation)?;
            perturbation.set_item("increasing", change.direction.is_increasing())?;
            perturbation.set_item("q_saved", change.q_saved)?;
            dict.set_item("perturbation", perturbation)?;
        }
        None => {
            dict.set_item("perturbation", py.None())?;
        }
    }

    Ok(dict.unbind())
}
