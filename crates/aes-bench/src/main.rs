//! `aes-bench` — AES-128-GCM sealing throughput benchmark.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from `AES_BENCH_*` environment variables.
//! 2. Initialise structured JSON logging on stderr.
//! 3. Run the timed loop and print the result line on stdout.
//!
//! Any failure is logged and turned into a non-zero exit status.

mod config;
mod crypto;
mod runner;
mod telemetry;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{error, info};

use config::Config;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: aes-bench configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        iterations = cfg.iterations,
        plaintext_len = cfg.plaintext.len(),
        key_schedule = ?cfg.key_schedule,
        "aes-bench starting"
    );

    // -----------------------------------------------------------------------
    // 3. Benchmark
    // -----------------------------------------------------------------------
    let stdout = io::stdout();
    execute(&cfg, &mut stdout.lock())
}

/// Run the configured benchmark, writing the result line to `out`.
///
/// An `Err` here becomes the process's non-zero exit status.
fn execute<W: Write>(cfg: &Config, out: &mut W) -> Result<()> {
    let key = cfg.key_bytes()?;
    let nonce = cfg.nonce_bytes()?;

    runner::run(
        out,
        cfg.plaintext.as_bytes(),
        &key,
        &nonce,
        cfg.iterations,
        cfg.key_schedule,
    )
    .map_err(|e| {
        error!(error = %e, "benchmark run failed");
        e
    })
    .context("AES-128-GCM benchmark failed")?;

    Ok(())
}
