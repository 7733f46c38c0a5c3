//! AES-128-GCM sealing primitives for the benchmark loop.
//!
//! This module owns the binding to the RustCrypto `aes-gcm` crate and the
//! length-checked key and nonce types. It knows nothing about timing.
//!
//! # Nonce size
//!
//! The binding is `AesGcm<Aes128, U16>`: GCM with a 128-bit nonce, whose
//! initial counter block is derived through GHASH. The 16-byte gate on
//! [`Nonce`] therefore matches what the primitive itself accepts.
//!
//! # Nonce reuse
//!
//! Every iteration seals under the same key and nonce. Under GCM that breaks
//! both confidentiality and integrity, so nothing here is fit for real data.
//! The reuse is what the benchmark measures (steady-state throughput on
//! identical inputs); rotating the nonce per call would change the workload.

pub mod cipher;

pub use cipher::{KeySchedule, Nonce, PerCallSealer, ReusedSealer, Sealer, SymmetricKey};
