//! Expansion and inflation restricted to the two free matrix entries
//!
//! ```text
//! Expansion:  x' = x + y/n + x*y        y' = y*y
//! Inflation:  x'' = x'^r / s            y'' = y'^r / s
//!             where s = n*x'^r + 2*y'^r
//! ```
//!
//! Inflation always leaves n*x + 2*y = 1. Expansion keeps it only for a
//! state that already satisfies it.

use crate::models::state::OrbitState;

/// Expansion step (matrix squaring on the invariant substructure)
///
/// # Example
/// ```
/// use elastiflop_core_rs::orchestrator::expansion::expand;
/// use elastiflop_core_rs::OrbitState;
///
/// let expanded = expand(&OrbitState::new(0.0, 0.5), 9.0);
/// assert_eq!(expanded.y, 0.25);
/// assert_eq!(expanded.x, 0.5 / 9.0);
/// ```
pub fn expand(state: &OrbitState, n: f64) -> OrbitState {
    OrbitState {
        x: state.x + state.y / n + state.x * state.y,
        y: state.y * state.y,
    }
}

/// Expanded x as a function of x alone
///
/// Substituting y = (1 - n*x)/2 gives x' = x + (1/n - n*x^2)/2. Agrees
/// with [`expand`] whenever the mass invariant holds.
pub fn expand_closed_form(x: f64, n: f64) -> f64 {
    x + 0.5 * (1.0 / n - n * x * x)
}

/// Inflation step: raise both entries to `infl` and renormalize columns
pub fn inflate(expanded: &OrbitState, n: f64, infl: f64) -> OrbitState {
    let x3 = expanded.x.powf(infl);
    let y3 = expanded.y.powf(infl);
    let sum = x3 * n + y3 * 2.0;
    OrbitState {
        x: x3 / sum,
        y: y3 / sum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_of_stochastic_state_keeps_mass() {
        // The square of a column-stochastic matrix is column-stochastic
        let n = 9.0;
        let state = OrbitState::new(1.0 / 130.0, 0.5 - 9.0 / 260.0);
        let expanded = expand(&state, n);
        assert!((expanded.mass(n) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_closed_form_matches_expand() {
        let n = 9.0;
        for k in [20.0, 50.0, 130.0, 1000.0] {
            let x = 1.0 / k;
            let state = OrbitState::new(x, 0.5 - n * x / 2.0);
            let diff = expand(&state, n).x - expand_closed_form(x, n);
            assert!(diff.abs() < 1e-14, "k={}: diff {}", k, diff);
        }
    }

    #[test]
    fn test_inflation_restores_mass() {
        let n = 31.0;
        let inflated = inflate(&OrbitState::new(0.016, 0.2), n, 2.0);
        assert!((inflated.mass(n) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_inflation_only_normalizes() {
        let n = 4.0;
        let expanded = OrbitState::new(0.1, 0.2);
        let inflated = inflate(&expanded, n, 1.0);
        assert!((inflated.x - 0.1 / 0.8).abs() < 1e-15);
        assert!((inflated.y - 0.2 / 0.8).abs() < 1e-15);
    }
}
