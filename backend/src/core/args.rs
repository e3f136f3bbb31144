//! Positional argument resolution
//!
//! Arguments are read in the order `n k_start infl lim delta`. Leading
//! arguments that were supplied are honored; the first missing one stops
//! the assignment and the remaining slots keep their presets. A malformed
//! argument discards everything and falls back to the complete preset set.

use crate::core::params::OrbitParams;
use std::str::FromStr;
use tracing::warn;

/// Notice printed whenever presets were used for at least one slot
pub const PRESET_NOTICE: &str =
    "Provide <N> <kstart> <start-inflation> <lim> - proceeding with pre-sets";

/// Outcome of resolving command-line arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParams {
    pub params: OrbitParams,
    /// True if any slot was filled from the presets
    pub used_presets: bool,
}

/// Resolve the five positional parameters, never failing
///
/// # Example
/// ```
/// use elastiflop_core_rs::core::args::resolve_params;
///
/// let args: Vec<String> = ["5", "35", "8.0", "50", "1.0"].iter().map(|s| s.to_string()).collect();
/// let resolved = resolve_params(&args);
/// assert!(!resolved.used_presets);
/// assert_eq!(resolved.params.n, 5);
/// assert_eq!(resolved.params.infl, 8.0);
/// ```
pub fn resolve_params<S: AsRef<str>>(args: &[S]) -> ResolvedParams {
    match assign_sequentially(args) {
        Ok((params, complete)) => match params.validate() {
            Ok(()) => ResolvedParams {
                params,
                used_presets: !complete,
            },
            Err(e) => {
                warn!(error = %e, "invalid parameters, using presets");
                presets()
            }
        },
        Err(bad) => {
            warn!(argument = %bad, "malformed argument, using presets");
            presets()
        }
    }
}

fn presets() -> ResolvedParams {
    ResolvedParams {
        params: OrbitParams::default(),
        used_presets: true,
    }
}

/// Returns the assigned parameters and whether all five were supplied, or
/// the offending text of the first argument that failed to parse.
fn assign_sequentially<S: AsRef<str>>(args: &[S]) -> Result<(OrbitParams, bool), String> {
    let mut params = OrbitParams::default();
    let mut slots = args.iter().map(|a| a.as_ref());

    let Some(n) = slots.next() else {
        return Ok((params, false));
    };
    params.n = parse_slot(n)?;

    let Some(k_start) = slots.next() else {
        return Ok((params, false));
    };
    params.k_start = parse_slot(k_start)?;

    let Some(infl) = slots.next() else {
        return Ok((params, false));
    };
    params.infl = parse_slot(infl)?;

    let Some(lim) = slots.next() else {
        return Ok((params, false));
    };
    params.lim = parse_slot(lim)?;

    let Some(delta) = slots.next() else {
        return Ok((params, false));
    };
    params.delta = parse_slot(delta)?;

    Ok((params, true))
}

fn parse_slot<T: FromStr>(raw: &str) -> Result<T, String> {
    raw.trim().parse::<T>().map_err(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_uses_presets() {
        let resolved = resolve_params::<String>(&[]);
        assert!(resolved.used_presets);
        assert_eq!(resolved.params, OrbitParams::default());
    }

    #[test]
    fn test_partial_arguments_keep_leading_values() {
        let resolved = resolve_params(&owned(&["31", "215"]));
        assert!(resolved.used_presets);
        assert_eq!(resolved.params.n, 31);
        assert_eq!(resolved.params.k_start, 215);
        assert_eq!(resolved.params.infl, 6.0);
        assert_eq!(resolved.params.lim, 100);
    }

    #[test]
    fn test_integer_slot_rejects_float_text() {
        let resolved = resolve_params(&owned(&["9.5", "130", "6.0", "100", "1.0"]));
        assert!(resolved.used_presets);
        assert_eq!(resolved.params, OrbitParams::default());
    }

    #[test]
    fn test_float_slot_accepts_integer_text() {
        let resolved = resolve_params(&owned(&["9", "135", "4", "50", "1"]));
        assert!(!resolved.used_presets);
        assert_eq!(resolved.params.infl, 4.0);
        assert_eq!(resolved.params.delta, 1.0);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let resolved = resolve_params(&owned(&["5", "35", "8.0", "50", "1.0", "junk"]));
        assert!(!resolved.used_presets);
        assert_eq!(resolved.params.lim, 50);
    }

    #[test]
    fn test_zero_size_falls_back() {
        let resolved = resolve_params(&owned(&["0", "35", "8.0", "50", "1.0"]));
        assert!(resolved.used_presets);
        assert_eq!(resolved.params, OrbitParams::default());
    }
}
