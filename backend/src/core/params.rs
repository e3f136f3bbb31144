//! Simulation parameters
//!
//! The orbit is fully determined by five scalars. Everything else in the
//! engine is derived from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a parameter set cannot drive a simulation
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("Matrix size n must be positive, got {0}")]
    NonPositiveSize(i64),

    #[error("Inflation must be finite, got {0}")]
    NonFiniteInflation(f64),

    #[error("Inflation delta must be finite, got {0}")]
    NonFiniteDelta(f64),
}

/// Parameters of one expansion/inflation run
///
/// # Example
/// ```
/// use elastiflop_core_rs::OrbitParams;
///
/// let params = OrbitParams::default();
/// assert_eq!(params.n, 9);
/// assert_eq!(params.k_start, 130);
/// assert_eq!(params.cycles(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    /// Size of the structured matrix family (number of 1/n rows)
    pub n: i64,

    /// Initial x is 1/k_start, or 0 when k_start <= 0
    pub k_start: i64,

    /// Starting inflation exponent
    pub infl: f64,

    /// Number of expansion/inflation cycles
    pub lim: i64,

    /// Inflation step applied every 5 cycles
    pub delta: f64,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            n: 9,
            k_start: 130,
            infl: 6.0,
            lim: 100,
            delta: 1.0,
        }
    }
}

impl OrbitParams {
    /// Create a parameter set, rejecting values the engine cannot use
    ///
    /// # Example
    /// ```
    /// use elastiflop_core_rs::OrbitParams;
    ///
    /// let params = OrbitParams::new(31, 215, 2.0, 50, 1.0).unwrap();
    /// assert_eq!(params.n, 31);
    /// assert!(OrbitParams::new(0, 215, 2.0, 50, 1.0).is_err());
    /// ```
    pub fn new(n: i64, k_start: i64, infl: f64, lim: i64, delta: f64) -> Result<Self, ParamsError> {
        let params = Self {
            n,
            k_start,
            infl,
            lim,
            delta,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that the parameters describe a usable orbit
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.n <= 0 {
            return Err(ParamsError::NonPositiveSize(self.n));
        }
        if !self.infl.is_finite() {
            return Err(ParamsError::NonFiniteInflation(self.infl));
        }
        if !self.delta.is_finite() {
            return Err(ParamsError::NonFiniteDelta(self.delta));
        }
        Ok(())
    }

    /// Number of cycles the simulator will run (negative lim runs none)
    pub fn cycles(&self) -> usize {
        usize::try_from(self.lim).unwrap_or(0)
    }

    /// n as a float, for use in the update formulas
    pub fn size(&self) -> f64 {
        self.n as f64
    }

    /// Starting value of x
    ///
    /// # Example
    /// ```
    /// use elastiflop_core_rs::OrbitParams;
    ///
    /// let mut params = OrbitParams::default();
    /// params.k_start = 0;
    /// assert_eq!(params.initial_x(), 0.0);
    /// ```
    pub fn initial_x(&self) -> f64 {
        if self.k_start > 0 {
            1.0 / self.k_start as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(OrbitParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = OrbitParams::new(-3, 10, 2.0, 10, 1.0).unwrap_err();
        assert_eq!(err, ParamsError::NonPositiveSize(-3));
    }

    #[test]
    fn test_nan_inflation_rejected() {
        let err = OrbitParams::new(9, 10, f64::NAN, 10, 1.0).unwrap_err();
        assert!(matches!(err, ParamsError::NonFiniteInflation(_)));
    }

    #[test]
    fn test_infinite_delta_rejected() {
        let err = OrbitParams::new(9, 10, 2.0, 10, f64::INFINITY).unwrap_err();
        assert!(matches!(err, ParamsError::NonFiniteDelta(_)));
    }

    #[test]
    fn test_negative_lim_runs_no_cycles() {
        let params = OrbitParams::new(9, 130, 6.0, -4, 1.0).unwrap();
        assert_eq!(params.cycles(), 0);
    }

    #[test]
    fn test_negative_k_start_gives_zero_x() {
        let params = OrbitParams::new(9, -5, 6.0, 1, 1.0).unwrap();
        assert_eq!(params.initial_x(), 0.0);
    }
}
