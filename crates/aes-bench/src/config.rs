//! Configuration loading and validation for the benchmark.
//!
//! Every setting is optional. With no `AES_BENCH_*` variables set the run uses
//! the fixed key, nonce, plaintext and iteration count the published numbers
//! were taken with.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::crypto::KeySchedule;

/// Prefix for all environment variables, e.g. `AES_BENCH_ITERATIONS`.
pub const ENV_PREFIX: &str = "AES_BENCH";

/// Validated benchmark configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// AES-128 key as a hex string. Length is checked by the runner.
    #[serde(default = "default_key")]
    pub key: String,

    /// Nonce as a hex string. Length is checked by the runner.
    #[serde(default = "default_nonce")]
    pub nonce: String,

    /// Text sealed on every iteration (encrypted as its UTF-8 bytes).
    #[serde(default = "default_plaintext")]
    pub plaintext: String,

    /// Number of seal operations to time. `0` is allowed.
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Whether the keyed cipher is rebuilt per seal or reused.
    #[serde(default)]
    pub key_schedule: KeySchedule,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_key() -> String {
    "000102030405060708090a0b0c0d0e0f".into()
}
fn default_nonce() -> String {
    "0f0e0d0c0b0a09080706050403020100".into()
}
fn default_plaintext() -> String {
    "Benchmarking AES encryption in Rust".into()
}
fn default_iterations() -> u32 {
    10_000_000
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from `AES_BENCH_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or a hex field does not decode.
    pub fn from_env() -> Result<Self> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load(source: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(source)
            .build()
            .context("failed to build aes-bench configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise aes-bench configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Decoded key bytes.
    pub fn key_bytes(&self) -> Result<Vec<u8>> {
        decode_hex(&self.key, "AES_BENCH_KEY")
    }

    /// Decoded nonce bytes.
    pub fn nonce_bytes(&self) -> Result<Vec<u8>> {
        decode_hex(&self.nonce, "AES_BENCH_NONCE")
    }

    // Byte lengths are left to the runner so its error taxonomy applies.
    fn validate(&self) -> Result<()> {
        self.key_bytes()?;
        self.nonce_bytes()?;
        if self.log_level.trim().is_empty() {
            anyhow::bail!("AES_BENCH_LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}

fn decode_hex(value: &str, name: &str) -> Result<Vec<u8>> {
    hex::decode(value.trim()).with_context(|| format!("{name} must be a hex string"))
}
