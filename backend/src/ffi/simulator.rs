//! PyO3 wrapper for OrbitSimulator
//!
//! # Example (from Python)
//!
//! ```python
//! from elastiflop_core_rs import OrbitSimulator
//!
//! sim = OrbitSimulator(9, 135, 4.0, 50, 1.0)
//! result = sim.step()
//! print(result["inflated"]["x"], sim.infl)
//! ```

use pyo3::exceptions::{PyStopIteration, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::cycle_result_to_py;
use crate::core::params::OrbitParams;
use crate::orchestrator::{OrbitSimulator as RustOrbitSimulator, SimulationError};
use crate::render::render_lines;

/// Python wrapper for the Rust simulator
#[pyclass(name = "OrbitSimulator", unsendable)]
pub struct PyOrbitSimulator {
    inner: RustOrbitSimulator,
}

#[pymethods]
impl PyOrbitSimulator {
    /// Create a simulator; raises ValueError on unusable parameters
    #[new]
    fn new(n: i64, k_start: i64, infl: f64, lim: i64, delta: f64) -> PyResult<Self> {
        let params = OrbitParams::new(n, k_start, infl, lim, delta)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let inner =
            RustOrbitSimulator::new(params).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Run one cycle; raises StopIteration once all cycles ran
    fn step(&mut self, py: Python) -> PyResult<Py<PyDict>> {
        match self.inner.step() {
            Ok(result) => cycle_result_to_py(py, &result),
            Err(e @ SimulationError::Finished(_)) => Err(PyStopIteration::new_err(e.to_string())),
            Err(e) => Err(PyValueError::new_err(e.to_string())),
        }
    }

    /// Run all remaining cycles and return the rendered output lines
    fn run_lines(&mut self) -> Vec<String> {
        self.inner.run();
        render_lines(self.inner.event_log())
    }

    /// Full event log as JSON
    fn events_json(&self) -> PyResult<String> {
        self.inner
            .event_log()
            .to_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.state().x
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.state().y
    }

    #[getter]
    fn infl(&self) -> f64 {
        self.inner.inflation()
    }

    #[getter]
    fn iteration(&self) -> usize {
        self.inner.iteration()
    }
}
