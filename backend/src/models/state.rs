//! Orbit state
//!
//! The structured matrix has only two free entries: x (the last column of
//! the first n rows) and y (the bottom-right 2x2 block). Every 1/n entry is
//! left unchanged by expansion and inflation, so (x, y) is the whole state.

use crate::core::params::OrbitParams;
use serde::{Deserialize, Serialize};

/// The two free entries of the structured matrix
///
/// # Example
/// ```
/// use elastiflop_core_rs::{OrbitParams, OrbitState};
///
/// let state = OrbitState::initial(&OrbitParams::default());
/// assert!((state.mass(9.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    pub x: f64,
    pub y: f64,
}

impl OrbitState {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Starting state: x from k_start, y chosen so that n*x + 2*y = 1
    pub fn initial(params: &OrbitParams) -> Self {
        let x = params.initial_x();
        let y = 0.5 - params.size() * x / 2.0;
        Self { x, y }
    }

    /// Column mass n*x + 2*y (1 for a stochastic state)
    pub fn mass(&self, n: f64) -> f64 {
        self.x * n + self.y * 2.0
    }
}

/// Whether the inflation schedule is currently stepping up or down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    pub fn is_increasing(&self) -> bool {
        matches!(self, Direction::Increasing)
    }
}
