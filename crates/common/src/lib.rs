//! Error taxonomy and report types shared across `aes-bench` crates.

pub mod error;
pub mod report;

pub use error::EncryptionError;
pub use report::RunResult;
