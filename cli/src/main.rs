//! Command-line driver: `elastiflop <n> <k_start> <infl> <lim> <delta>`
//!
//! Missing or malformed arguments fall back to the presets
//! (9, 130, 6.0, 100, 1.0). Output goes to stdout; logs go to stderr and
//! are filtered by RUST_LOG (default `warn`). There are no help or version
//! flags: `-h` is just another malformed argument.

use clap::Parser;
use elastiflop_core_rs::render::render_event;
use elastiflop_core_rs::{resolve_params, OrbitParams, OrbitSimulator, PRESET_NOTICE};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Expansion/inflation orbit on a structured matrix family",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Matrix size family parameter, then k_start, infl, lim, delta
    #[arg(
        value_name = "N K_START INFL LIM DELTA",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    params: Vec<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let resolved = resolve_params(&args.params);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&mut out, resolved.used_presets, resolved.params) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "simulation aborted");
            ExitCode::FAILURE
        }
    }
}

/// Print the notice (if presets were used), the start line and every
/// cycle, draining the event log as it goes
fn run(
    out: &mut impl Write,
    used_presets: bool,
    params: OrbitParams,
) -> Result<(), Box<dyn std::error::Error>> {
    if used_presets {
        writeln!(out, "{}", PRESET_NOTICE)?;
    }

    let mut sim = OrbitSimulator::new(params)?;
    loop {
        for event in sim.drain_events() {
            writeln!(out, "{}", render_event(&event))?;
        }
        if sim.is_finished() {
            break;
        }
        sim.step()?;
    }

    out.flush()?;
    Ok(())
}
