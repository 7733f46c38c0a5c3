//! The single result line a benchmark run produces.
//!
//! The text format is consumed by existing output parsers and must stay
//! byte-compatible, including the historical "GSM" spelling.

use std::fmt;
use std::time::Duration;

/// Outcome of one completed benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Number of seal operations performed.
    pub iterations: u32,
    /// Wall-clock time spent in the timed loop.
    pub elapsed: Duration,
    /// Sum of `ciphertext + tag` lengths over all iterations.
    pub total_len: usize,
    /// Whether the keyed cipher was built once and reused across iterations.
    pub reused_cipher: bool,
}

impl RunResult {
    /// Elapsed time in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    fn label(&self) -> &'static str {
        if self.reused_cipher {
            "AES128 GSM with reusable encryptor"
        } else {
            "AES128 GSM"
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} run {} times took {:.6} seconds. total_len dummy value is {}",
            self.label(),
            self.iterations,
            self.elapsed_secs(),
            self.total_len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_result_line_verbatim() {
        let r = RunResult {
            iterations: 100,
            elapsed: Duration::from_millis(1500),
            total_len: 5100,
            reused_cipher: false,
        };
        assert_eq!(
            r.to_string(),
            "AES128 GSM run 100 times took 1.500000 seconds. total_len dummy value is 5100"
        );
    }

    #[test]
    fn reused_cipher_uses_reusable_encryptor_wording() {
        let r = RunResult {
            iterations: 1,
            elapsed: Duration::from_micros(2),
            total_len: 51,
            reused_cipher: true,
        };
        assert_eq!(
            r.to_string(),
            "AES128 GSM with reusable encryptor run 1 times took 0.000002 seconds. total_len dummy value is 51"
        );
    }

    #[test]
    fn zero_iterations_report() {
        let r = RunResult {
            iterations: 0,
            elapsed: Duration::ZERO,
            total_len: 0,
            reused_cipher: false,
        };
        assert_eq!(r.elapsed_secs(), 0.0);
        assert!(r.to_string().ends_with("took 0.000000 seconds. total_len dummy value is 0"));
    }
}
