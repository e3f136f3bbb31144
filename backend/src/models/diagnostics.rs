//! Display-only diagnostics
//!
//! These quantities describe the orbit but never feed back into it. Any
//! domain error (log of a non-positive number, division by zero) degrades
//! the whole diagnostic block to zeros; the state update is unaffected.

use crate::models::state::{Direction, OrbitState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arithmetic domain errors raised by diagnostic expressions
#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum DomainError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Logarithm of non-positive value {0}")]
    NonPositiveLog(f64),
}

/// Divide, failing only on an exactly-zero denominator
pub fn checked_div(num: f64, den: f64) -> Result<f64, DomainError> {
    if den == 0.0 {
        Err(DomainError::DivisionByZero)
    } else {
        Ok(num / den)
    }
}

/// Natural log, failing on arguments <= 0 (NaN passes through)
pub fn checked_ln(value: f64) -> Result<f64, DomainError> {
    if value <= 0.0 {
        Err(DomainError::NonPositiveLog(value))
    } else {
        Ok(value.ln())
    }
}

/// Diagnostics of one expansion step
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpansionDiagnostics {
    /// ln(y/x) / ln(y'/x'), the contraction of the log-ratio
    pub contraction: f64,
    /// 1/x' (k' in the output)
    pub kinv: f64,
    /// 1/(n - k'/2)
    pub q: f64,
    /// q relative to the q saved at the last inflation change
    pub qratio: f64,
}

impl ExpansionDiagnostics {
    /// Compute the expansion diagnostics for `before` -> `after`
    ///
    /// # Example
    /// ```
    /// use elastiflop_core_rs::models::diagnostics::ExpansionDiagnostics;
    /// use elastiflop_core_rs::models::state::{Direction, OrbitState};
    ///
    /// // x = 0 makes y/x a division by zero
    /// let before = OrbitState::new(0.0, 0.5);
    /// let after = OrbitState::new(0.5 / 9.0, 0.25);
    /// assert!(ExpansionDiagnostics::compute(&before, &after, 9.0, Direction::Increasing, 1.0).is_err());
    /// ```
    pub fn compute(
        before: &OrbitState,
        after: &OrbitState,
        n: f64,
        direction: Direction,
        q_prev: f64,
    ) -> Result<Self, DomainError> {
        let contraction = checked_div(
            checked_ln(checked_div(before.y, before.x)?)?,
            checked_ln(checked_div(after.y, after.x)?)?,
        )?;
        let kinv = checked_div(1.0, after.x)?;
        let q = checked_div(1.0, n - kinv / 2.0)?;
        let qratio = if direction.is_increasing() {
            checked_div(q, q_prev)?
        } else {
            checked_div(q_prev, q)?
        };
        Ok(Self {
            contraction,
            kinv,
            q,
            qratio,
        })
    }
}

/// Diagnostics of one inflation step
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InflationDiagnostics {
    /// ln(y''/x'') / ln(y'/x'); reproduces the applied exponent
    pub inflation: f64,
    /// 1/x''
    pub kinv: f64,
}

impl InflationDiagnostics {
    pub fn compute(expanded: &OrbitState, inflated: &OrbitState) -> Result<Self, DomainError> {
        let inflation = checked_div(
            checked_ln(checked_div(inflated.y, inflated.x)?)?,
            checked_ln(checked_div(expanded.y, expanded.x)?)?,
        )?;
        let kinv = checked_div(1.0, inflated.x)?;
        Ok(Self { inflation, kinv })
    }
}
