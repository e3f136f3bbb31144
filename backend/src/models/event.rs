//! Event logging for orbit runs.
//!
//! Every line the simulator prints corresponds to one event, so the log is
//! a complete, ordered record of a run. Events enable:
//! - Rendering (the text output is produced from the log)
//! - Analysis (extract the orbit and its diagnostics)
//! - Export (serialize a run as JSON)
//!
//! # Example
//!
//! ```rust
//! use elastiflop_core_rs::models::event::{CycleEvent, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(CycleEvent::ScheduleMarker { iteration: 0, inflation: Some(6.0) });
//! assert_eq!(log.events_at_iteration(0).len(), 1);
//! ```

use crate::models::diagnostics::{ExpansionDiagnostics, InflationDiagnostics};
use crate::models::state::{Direction, OrbitState};
use serde::Serialize;

/// Orbit event capturing one printed step.
///
/// Events within a cycle are logged in output order: marker, expansion,
/// inflation, then (every 5th cycle) perturbation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CycleEvent {
    /// Initial state before any cycle
    Start {
        state: OrbitState,
        mass: f64,
        k_start: i64,
    },

    /// Start-of-cycle marker; carries the inflation in effect when the
    /// cycle index is a multiple of 5
    ScheduleMarker {
        iteration: usize,
        inflation: Option<f64>,
    },

    /// Result of the expansion step
    Expansion {
        iteration: usize,
        state: OrbitState,
        mass: f64,
        diagnostics: ExpansionDiagnostics,
    },

    /// Result of inflation and normalization
    Inflation {
        iteration: usize,
        state: OrbitState,
        mass: f64,
        diagnostics: InflationDiagnostics,
    },

    /// Inflation exponent changed at the end of a cycle
    Perturbation {
        iteration: usize,
        inflation: f64,
        direction: Direction,
        q_saved: f64,
    },
}

impl CycleEvent {
    /// Cycle index the event belongs to (None for the start event)
    pub fn iteration(&self) -> Option<usize> {
        match self {
            CycleEvent::Start { .. } => None,
            CycleEvent::ScheduleMarker { iteration, .. } => Some(*iteration),
            CycleEvent::Expansion { iteration, .. } => Some(*iteration),
            CycleEvent::Inflation { iteration, .. } => Some(*iteration),
            CycleEvent::Perturbation { iteration, .. } => Some(*iteration),
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            CycleEvent::Start { .. } => "Start",
            CycleEvent::ScheduleMarker { .. } => "ScheduleMarker",
            CycleEvent::Expansion { .. } => "Expansion",
            CycleEvent::Inflation { .. } => "Inflation",
            CycleEvent::Perturbation { .. } => "Perturbation",
        }
    }
}

/// Event log for storing and querying orbit events.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    events: Vec<CycleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: CycleEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[CycleEvent] {
        &self.events
    }

    /// Get events for a specific cycle
    pub fn events_at_iteration(&self, iteration: usize) -> Vec<&CycleEvent> {
        self.events
            .iter()
            .filter(|e| e.iteration() == Some(iteration))
            .collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&CycleEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Inflated states in cycle order: the orbit proper
    pub fn orbit(&self) -> Vec<OrbitState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CycleEvent::Inflation { state, .. } => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// Remove and return all events, in order
    pub fn drain(&mut self) -> Vec<CycleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serialize the whole log as a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> EventLog {
        let mut log = EventLog::new();
        log.log(CycleEvent::Start {
            state: OrbitState::new(0.0, 0.5),
            mass: 1.0,
            k_start: 0,
        });
        log.log(CycleEvent::ScheduleMarker {
            iteration: 0,
            inflation: Some(2.0),
        });
        log.log(CycleEvent::Inflation {
            iteration: 0,
            state: OrbitState::new(0.1, 0.05),
            mass: 1.0,
            diagnostics: InflationDiagnostics::default(),
        });
        log
    }

    #[test]
    fn test_start_has_no_iteration() {
        let log = sample_log();
        assert_eq!(log.events()[0].iteration(), None);
        assert_eq!(log.events_at_iteration(0).len(), 2);
    }

    #[test]
    fn test_events_of_type() {
        let log = sample_log();
        assert_eq!(log.events_of_type("Inflation").len(), 1);
        assert!(log.events_of_type("Perturbation").is_empty());
    }

    #[test]
    fn test_orbit_collects_inflated_states() {
        assert_eq!(sample_log().orbit(), vec![OrbitState::new(0.1, 0.05)]);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = sample_log();
        let drained = log.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0].event_type(), "Start");
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_json_is_tagged() {
        let json = sample_log().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["type"], "Start");
        assert_eq!(value[1]["inflation"], 2.0);
    }
}
