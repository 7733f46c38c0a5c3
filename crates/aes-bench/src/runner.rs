//! The timed sealing loop.
//!
//! A run validates the key and nonce, builds a [`Sealer`] once, seals the same
//! plaintext `iterations` times and reports the elapsed wall-clock time together
//! with the accumulated `ciphertext + tag` length. The accumulator keeps every
//! seal result observed so the loop body cannot be optimised away; its value
//! is only ever printed.

use std::io::{self, Write};
use std::time::Instant;

use common::{EncryptionError, RunResult};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::crypto::{KeySchedule, Nonce, PerCallSealer, ReusedSealer, Sealer, SymmetricKey};

/// Errors that end a benchmark run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Validation or sealing failed; nothing was written.
    #[error(transparent)]
    Encryption(#[from] EncryptionError),

    /// The result line could not be written.
    #[error("failed to write result line: {0}")]
    Output(#[from] io::Error),
}

/// Run the benchmark with the given key schedule and write the result line to
/// `out`.
///
/// # Errors
///
/// Returns [`EncryptionError::InvalidKeyLength`] or
/// [`EncryptionError::InvalidIvLength`] before any encryption, or
/// [`EncryptionError::EncryptionFailed`] if the primitive rejects a seal.
/// Nothing is written to `out` on any of these.
pub fn run<W: Write>(
    out: &mut W,
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    iterations: u32,
    schedule: KeySchedule,
) -> Result<RunResult, RunError> {
    match schedule {
        KeySchedule::PerCall => {
            run_with(out, plaintext, key, nonce, iterations, schedule, PerCallSealer::new)
        }
        KeySchedule::Reused => {
            run_with(out, plaintext, key, nonce, iterations, schedule, ReusedSealer::new)
        }
    }
}

/// Write the single result line for `result`.
pub fn report<W: Write>(out: &mut W, result: &RunResult) -> io::Result<()> {
    writeln!(out, "{result}")?;
    out.flush()
}

fn run_with<W, S, F>(
    out: &mut W,
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    iterations: u32,
    schedule: KeySchedule,
    build: F,
) -> Result<RunResult, RunError>
where
    W: Write,
    S: Sealer,
    F: FnOnce(SymmetricKey, Nonce) -> S,
{
    let result = measure(plaintext, key, nonce, iterations, schedule, build)?;
    report(out, &result)?;
    info!(
        iterations = result.iterations,
        elapsed_secs = result.elapsed_secs(),
        total_len = result.total_len,
        ?schedule,
        "benchmark complete"
    );
    Ok(result)
}

/// Validate inputs, build a sealer with `build` and time `iterations` seals.
///
/// Key length is checked before nonce length. `build` is only invoked once
/// both checks pass, and the clock starts after it returns. `build` must
/// construct the sealer `schedule` names.
fn measure<S, F>(
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    iterations: u32,
    schedule: KeySchedule,
    build: F,
) -> Result<RunResult, EncryptionError>
where
    S: Sealer,
    F: FnOnce(SymmetricKey, Nonce) -> S,
{
    let key = SymmetricKey::try_from(key)?;
    let nonce = Nonce::try_from(nonce)?;
    let sealer = build(key, nonce);

    debug!(iterations, plaintext_len = plaintext.len(), "starting timed loop");

    let start = Instant::now();
    let mut total_len: usize = 0;
    for iteration in 0..iterations {
        let sealed = sealer.seal(plaintext).map_err(|e| {
            error!(iteration, error = %e, "seal failed, aborting run");
            EncryptionError::EncryptionFailed(e.to_string())
        })?;
        total_len += sealed.sealed_len();
    }
    let elapsed = start.elapsed();

    Ok(RunResult {
        iterations,
        elapsed,
        total_len,
        reused_cipher: schedule.reuses_cipher(),
    })
}
