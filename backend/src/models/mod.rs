//! Domain types for the orbit: state, diagnostics and events

pub mod diagnostics;
pub mod event;
pub mod state;

pub use diagnostics::{DomainError, ExpansionDiagnostics, InflationDiagnostics};
pub use event::{CycleEvent, EventLog};
pub use state::{Direction, OrbitState};
