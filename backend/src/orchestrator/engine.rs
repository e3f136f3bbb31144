//! Orbit simulator engine
//!
//! Owns the running state and drives the cycle loop:
//!
//! ```text
//! For each cycle i in 0..lim:
//! 1. Log the schedule marker (inflation announced when i % 5 == 0)
//! 2. Expand (x, y) -> (x', y') and compute expansion diagnostics
//! 3. Inflate and normalize (x', y') -> (x'', y'') and compute diagnostics
//! 4. Advance the iteration counter; every 5th cycle perturb inflation
//! 5. (x, y) <- (x'', y'')
//! ```
//!
//! Diagnostics are display-only. A domain error inside a diagnostic block
//! zeroes that block and the cycle carries on.
//!
//! # Example
//!
//! ```rust
//! use elastiflop_core_rs::{OrbitParams, OrbitSimulator};
//!
//! let params = OrbitParams::new(9, 135, 4.0, 50, 1.0).unwrap();
//! let mut sim = OrbitSimulator::new(params).unwrap();
//!
//! let results = sim.run();
//! assert_eq!(results.len(), 50);
//! assert!((sim.state().mass(9.0) - 1.0).abs() < 1e-9);
//! ```

use crate::core::params::{OrbitParams, ParamsError};
use crate::models::diagnostics::{ExpansionDiagnostics, InflationDiagnostics};
use crate::models::event::{CycleEvent, EventLog};
use crate::models::state::OrbitState;
use crate::orchestrator::expansion::{expand, inflate};
use crate::orchestrator::schedule::{InflationSchedule, Perturbation};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Simulation error types
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("All {0} cycles have already run")]
    Finished(usize),
}

/// Result of a single cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleResult {
    /// Cycle index (0-based)
    pub iteration: usize,

    /// Inflation applied in this cycle
    pub inflation_applied: f64,

    /// State after expansion
    pub expanded: OrbitState,

    /// State after inflation and normalization
    pub inflated: OrbitState,

    pub expansion: ExpansionDiagnostics,
    pub inflation: InflationDiagnostics,

    /// Inflation change scheduled at the end of this cycle
    pub perturbation: Option<Perturbation>,
}

/// Expansion/inflation iteration on the structured matrix family
pub struct OrbitSimulator {
    params: OrbitParams,
    state: OrbitState,
    schedule: InflationSchedule,
    iteration: usize,
    event_log: EventLog,
}

impl OrbitSimulator {
    /// Initialize state from the parameters and log the start event
    pub fn new(params: OrbitParams) -> Result<Self, SimulationError> {
        params.validate()?;

        let state = OrbitState::initial(&params);
        let mut event_log = EventLog::new();
        event_log.log(CycleEvent::Start {
            state,
            mass: state.mass(params.size()),
            k_start: params.k_start,
        });

        Ok(Self {
            params,
            state,
            schedule: InflationSchedule::new(&params),
            iteration: 0,
            event_log,
        })
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    /// Current (x, y)
    pub fn state(&self) -> OrbitState {
        self.state
    }

    /// Number of completed cycles
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Inflation the next cycle will apply
    pub fn inflation(&self) -> f64 {
        self.schedule.inflation()
    }

    pub fn schedule(&self) -> &InflationSchedule {
        &self.schedule
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.params.cycles()
    }

    /// Asymptotic ratio of stable q values across one inflation change
    ///
    /// Observed empirically to approach (n/2)^delta.
    pub fn predicted_q_ratio(&self) -> f64 {
        (self.params.size() / 2.0).powf(self.params.delta)
    }

    /// Run one expansion/inflation cycle
    pub fn step(&mut self) -> Result<CycleResult, SimulationError> {
        if self.is_finished() {
            return Err(SimulationError::Finished(self.params.cycles()));
        }

        let iteration = self.iteration;
        let n = self.params.size();

        self.event_log.log(CycleEvent::ScheduleMarker {
            iteration,
            inflation: self.schedule.marker(iteration),
        });

        // Expansion
        let expanded = expand(&self.state, n);
        let expansion = ExpansionDiagnostics::compute(
            &self.state,
            &expanded,
            n,
            self.schedule.direction(),
            self.schedule.q_prev(),
        )
        .unwrap_or_else(|e| {
            debug!(iteration, error = %e, "expansion diagnostics degraded");
            ExpansionDiagnostics::default()
        });
        self.event_log.log(CycleEvent::Expansion {
            iteration,
            state: expanded,
            mass: expanded.mass(n),
            diagnostics: expansion,
        });

        // Inflation
        let inflation_applied = self.schedule.inflation();
        let inflated = inflate(&expanded, n, inflation_applied);
        let inflation = InflationDiagnostics::compute(&expanded, &inflated).unwrap_or_else(|e| {
            debug!(iteration, error = %e, "inflation diagnostics degraded");
            InflationDiagnostics::default()
        });
        self.event_log.log(CycleEvent::Inflation {
            iteration,
            state: inflated,
            mass: inflated.mass(n),
            diagnostics: inflation,
        });

        // Schedule
        self.iteration += 1;
        let perturbation = self.schedule.advance(self.iteration, expansion.q);
        if let Some(change) = perturbation {
            debug!(
                completed = change.completed,
                inflation = change.inflation,
                direction = ?change.direction,
                "inflation changed"
            );
            self.event_log.log(CycleEvent::Perturbation {
                iteration,
                inflation: change.inflation,
                direction: change.direction,
                q_saved: change.q_saved,
            });
        }

        self.state = inflated;

        Ok(CycleResult {
            iteration,
            inflation_applied,
            expanded,
            inflated,
            expansion,
            inflation,
            perturbation,
        })
    }

    /// Run all remaining cycles
    pub fn run(&mut self) -> Vec<CycleResult> {
        self.run_cycles(usize::MAX)
    }

    /// Run at most `max_cycles` further cycles, stopping early at `lim`
    pub fn run_cycles(&mut self, max_cycles: usize) -> Vec<CycleResult> {
        let mut results = Vec::new();
        while results.len() < max_cycles {
            match self.step() {
                Ok(result) => results.push(result),
                Err(_) => break,
            }
        }
        results
    }

    /// Take every event logged so far, leaving the log empty
    ///
    /// Streaming consumers call this after each cycle so memory stays
    /// constant regardless of `lim`.
    pub fn drain_events(&mut self) -> Vec<CycleEvent> {
        self.event_log.drain()
    }
}
