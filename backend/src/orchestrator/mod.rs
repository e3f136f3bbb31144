//! Orchestrator - the expansion/inflation cycle loop
//!
//! See `engine.rs` for the loop itself; the step functions and the
//! inflation schedule live in their own modules.

pub mod engine;
pub mod expansion;
pub mod schedule;

// Re-export main types for convenience
pub use engine::{CycleResult, OrbitSimulator, SimulationError};
pub use expansion::{expand, expand_closed_form, inflate};
pub use schedule::{InflationSchedule, Perturbation, PERTURBATION_PERIOD};
