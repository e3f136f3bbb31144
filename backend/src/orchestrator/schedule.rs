//! Inflation schedule
//!
//! Every 5th completed cycle the inflation exponent moves by `delta`:
//! upwards while `2*iteration - 5 <= lim`, downwards afterwards. The new
//! exponent is applied from the next cycle on, and announced by that
//! cycle's start marker.

use crate::core::params::OrbitParams;
use crate::models::state::Direction;
use serde::{Deserialize, Serialize};

/// Cycles between inflation changes
pub const PERTURBATION_PERIOD: usize = 5;

/// A change of the inflation exponent at the end of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perturbation {
    /// Number of completed cycles when the change happened
    pub completed: usize,
    /// Inflation after the change
    pub inflation: f64,
    pub direction: Direction,
    /// q of the cycle that triggered the change, the new reference for qratio
    pub q_saved: f64,
}

/// Schedule state carried across cycles
///
/// # Example
/// ```
/// use elastiflop_core_rs::orchestrator::schedule::InflationSchedule;
/// use elastiflop_core_rs::OrbitParams;
///
/// let mut schedule = InflationSchedule::new(&OrbitParams::default());
/// assert!(schedule.advance(4, 0.5).is_none());
/// let change = schedule.advance(5, 0.5).unwrap();
/// assert_eq!(change.inflation, 7.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationSchedule {
    infl: f64,
    delta: f64,
    lim: i64,
    direction: Direction,
    q_prev: f64,
}

impl InflationSchedule {
    pub fn new(params: &OrbitParams) -> Self {
        Self {
            infl: params.infl,
            delta: params.delta,
            lim: params.lim,
            direction: Direction::Increasing,
            q_prev: 1.0,
        }
    }

    /// Inflation exponent applied by the current cycle
    pub fn inflation(&self) -> f64 {
        self.infl
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// q saved at the last change (1.0 before the first one)
    pub fn q_prev(&self) -> f64 {
        self.q_prev
    }

    /// Inflation to announce at the start of cycle `iteration`, if any
    pub fn marker(&self, iteration: usize) -> Option<f64> {
        (iteration % PERTURBATION_PERIOD == 0).then_some(self.infl)
    }

    /// Bookkeeping after a cycle; `completed` is the incremented counter
    pub fn advance(&mut self, completed: usize, q: f64) -> Option<Perturbation> {
        if completed % PERTURBATION_PERIOD != 0 {
            return None;
        }

        if 2 * completed as i64 - 5 > self.lim {
            self.infl -= self.delta;
            self.direction = Direction::Decreasing;
        } else {
            self.infl += self.delta;
            self.direction = Direction::Increasing;
        }
        self.q_prev = q;

        Some(Perturbation {
            completed,
            inflation: self.infl,
            direction: self.direction,
            q_saved: q,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(lim: i64) -> InflationSchedule {
        InflationSchedule::new(&OrbitParams::new(9, 130, 6.0, lim, 1.0).unwrap())
    }

    #[test]
    fn test_no_change_between_multiples_of_five() {
        let mut s = schedule(100);
        for completed in 1..5 {
            assert!(s.advance(completed, 0.3).is_none());
        }
        assert_eq!(s.inflation(), 6.0);
        assert_eq!(s.direction(), Direction::Increasing);
    }

    #[test]
    fn test_marker_only_on_multiples_of_five() {
        let s = schedule(100);
        assert_eq!(s.marker(0), Some(6.0));
        assert_eq!(s.marker(3), None);
        assert_eq!(s.marker(10), Some(6.0));
    }

    #[test]
    fn test_q_saved_at_perturbation() {
        let mut s = schedule(100);
        assert_eq!(s.q_prev(), 1.0);
        s.advance(5, 0.25);
        assert_eq!(s.q_prev(), 0.25);
        s.advance(6, 0.75);
        assert_eq!(s.q_prev(), 0.25);
    }

    #[test]
    fn test_crossover_rule() {
        let mut s = schedule(12);
        let first = s.advance(5, 0.1).unwrap();
        assert_eq!(first.direction, Direction::Increasing);
        assert_eq!(first.inflation, 7.0);
        let second = s.advance(10, 0.1).unwrap();
        assert_eq!(second.direction, Direction::Decreasing);
        assert_eq!(second.inflation, 6.0);
    }
}
