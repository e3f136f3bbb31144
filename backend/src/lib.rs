//! Elastiflop Core - Rust Engine
//!
//! Expansion/inflation (MCL-style) iteration on a structured matrix family
//! whose only free entries are two scalars x and y. Used to observe how the
//! orbit settles into a stable flip-flop and how it moves when inflation
//! changes mid-run.
//!
//! # Architecture
//!
//! - **core**: Parameters and command-line resolution
//! - **models**: Domain types (OrbitState, diagnostics, events)
//! - **orchestrator**: Step functions, inflation schedule, cycle loop
//! - **render**: Fixed-format text output
//!
//! # Critical Invariants
//!
//! 1. n*x + 2*y = 1 after initialization and after every inflation
//! 2. Diagnostics never change the orbit and never abort a cycle
//! 3. Runs are fully deterministic given the five parameters

// Module declarations
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod render;

// Re-exports for convenience
pub use self::core::args::{resolve_params, ResolvedParams, PRESET_NOTICE};
pub use self::core::params::{OrbitParams, ParamsError};
pub use models::{
    diagnostics::{DomainError, ExpansionDiagnostics, InflationDiagnostics},
    event::{CycleEvent, EventLog},
    state::{Direction, OrbitState},
};
pub use orchestrator::{CycleResult, OrbitSimulator, SimulationError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn elastiflop_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulator::PyOrbitSimulator>()?;
    Ok(())
}
