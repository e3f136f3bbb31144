//! Text rendering of orbit events
//!
//! Line formats are fixed so runs can be compared against golden output:
//!
//! ```text
//! At start x=%f y=%f sum=%f k=%d
//! Inflation set to %.2f | ---
//! Exp ite=%d x=%.16f y=%.16f sum=%f contraction=%f k'=%.10f kinv2Ndiff=%.4f ratio=%.10f
//! Inf ite=%d x=%.16f y=%.16f sum=%f   inflation=%f k'=%.10f
//! <empty line after an inflation change>
//! ```

use crate::models::event::{CycleEvent, EventLog};

/// Marker printed at the start of cycles that do not announce inflation
pub const SEPARATOR: &str = "---";

/// Fixed-point formatting with lowercase non-finite spellings
fn fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.*}", places, value)
    }
}

/// Render one event as its output line
///
/// # Example
/// ```
/// use elastiflop_core_rs::models::event::CycleEvent;
/// use elastiflop_core_rs::render::render_event;
///
/// let marker = CycleEvent::ScheduleMarker { iteration: 5, inflation: Some(7.0) };
/// assert_eq!(render_event(&marker), "Inflation set to 7.00");
/// ```
pub fn render_event(event: &CycleEvent) -> String {
    match event {
        CycleEvent::Start {
            state,
            mass,
            k_start,
        } => format!(
            "At start x={} y={} sum={} k={}",
            fixed(state.x, 6),
            fixed(state.y, 6),
            fixed(*mass, 6),
            k_start
        ),
        CycleEvent::ScheduleMarker { inflation, .. } => match inflation {
            Some(infl) => format!("Inflation set to {}", fixed(*infl, 2)),
            None => SEPARATOR.to_string(),
        },
        CycleEvent::Expansion {
            iteration,
            state,
            mass,
            diagnostics,
        } => format!(
            "Exp ite={} x={} y={} sum={} contraction={} k'={} kinv2Ndiff={} ratio={}",
            iteration,
            fixed(state.x, 16),
            fixed(state.y, 16),
            fixed(*mass, 6),
            fixed(diagnostics.contraction, 6),
            fixed(diagnostics.kinv, 10),
            fixed(diagnostics.q, 4),
            fixed(diagnostics.qratio, 10)
        ),
        CycleEvent::Inflation {
            iteration,
            state,
            mass,
            diagnostics,
        } => format!(
            "Inf ite={} x={} y={} sum={}   inflation={} k'={}",
            iteration,
            fixed(state.x, 16),
            fixed(state.y, 16),
            fixed(*mass, 6),
            fixed(diagnostics.inflation, 6),
            fixed(diagnostics.kinv, 10)
        ),
        CycleEvent::Perturbation { .. } => String::new(),
    }
}

/// Render a whole log, one string per output line
pub fn render_lines(log: &EventLog) -> Vec<String> {
    log.events().iter().map(render_event).collect()
}
