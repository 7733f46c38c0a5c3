//! Key and nonce types plus the two sealing strategies the runner can time.

use std::fmt;

use aes_gcm::{
    aead::{consts::U16, generic_array::GenericArray, AeadInPlace, KeyInit},
    aes::Aes128,
    AesGcm,
};
use common::EncryptionError;
use serde::Deserialize;
use thiserror::Error;

/// Byte length of an AES-128 key (16 bytes = 128 bits).
pub const KEY_LEN: usize = 16;

/// Byte length of the nonce this benchmark accepts (16 bytes = 128 bits).
pub const NONCE_LEN: usize = 16;

/// Byte length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// AES-128-GCM with a 128-bit nonce and a 128-bit tag.
pub type Aes128Gcm16 = AesGcm<Aes128, U16>;

/// A validated AES-128 key.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey([u8; KEY_LEN]);

impl SymmetricKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for SymmetricKey {
    type Error = EncryptionError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key = bytes
            .try_into()
            .map_err(|_| EncryptionError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(key))
    }
}

// Key material stays out of logs and panic messages.
impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey").finish_non_exhaustive()
    }
}

/// A validated 16-byte nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = EncryptionError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let nonce = bytes
            .try_into()
            .map_err(|_| EncryptionError::InvalidIvLength {
                expected: NONCE_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(nonce))
    }
}

/// Ciphertext and detached tag from a single seal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedOutput {
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

impl SealedOutput {
    /// Combined length of ciphertext and tag.
    pub fn sealed_len(&self) -> usize {
        self.ciphertext.len() + self.tag.len()
    }
}

/// Errors produced by the AEAD primitive.
#[derive(Debug, Error)]
pub enum SealError {
    /// AES-GCM refused the operation (e.g. plaintext longer than GCM allows).
    #[error("aead seal failed: {0}")]
    Aead(aes_gcm::Error),
}

/// The operation the benchmark loop times.
#[cfg_attr(test, mockall::automock)]
pub trait Sealer {
    /// Encrypt and authenticate `plaintext` under the sealer's fixed key and nonce.
    fn seal(&self, plaintext: &[u8]) -> Result<SealedOutput, SealError>;
}

/// How the AES key schedule is handled across iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySchedule {
    /// Expand the key inside every seal call.
    #[default]
    PerCall,
    /// Expand the key once and reuse the keyed cipher.
    Reused,
}

impl KeySchedule {
    pub fn reuses_cipher(self) -> bool {
        matches!(self, KeySchedule::Reused)
    }
}

/// Seals with a cipher keyed afresh on every call, the way a one-shot
/// `seal(plaintext, key, nonce)` library API behaves.
#[derive(Debug, Clone)]
pub struct PerCallSealer {
    key: SymmetricKey,
    nonce: Nonce,
}

impl PerCallSealer {
    pub fn new(key: SymmetricKey, nonce: Nonce) -> Self {
        Self { key, nonce }
    }
}

impl Sealer for PerCallSealer {
    fn seal(&self, plaintext: &[u8]) -> Result<SealedOutput, SealError> {
        let cipher = Aes128Gcm16::new(&GenericArray::from(*self.key.as_bytes()));
        seal_with(&cipher, &GenericArray::from(*self.nonce.as_bytes()), plaintext)
    }
}

/// Seals with a cipher keyed once at construction.
pub struct ReusedSealer {
    cipher: Aes128Gcm16,
    nonce: GenericArray<u8, U16>,
}

impl ReusedSealer {
    pub fn new(key: SymmetricKey, nonce: Nonce) -> Self {
        Self {
            cipher: Aes128Gcm16::new(&GenericArray::from(*key.as_bytes())),
            nonce: GenericArray::from(*nonce.as_bytes()),
        }
    }
}

impl Sealer for ReusedSealer {
    fn seal(&self, plaintext: &[u8]) -> Result<SealedOutput, SealError> {
        seal_with(&self.cipher, &self.nonce, plaintext)
    }
}

fn seal_with(
    cipher: &Aes128Gcm16,
    nonce: &GenericArray<u8, U16>,
    plaintext: &[u8],
) -> Result<SealedOutput, SealError> {
    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(nonce, b"", &mut ciphertext)
        .map_err(SealError::Aead)?;
    Ok(SealedOutput {
        ciphertext,
        tag: tag.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_gcm::aead::Aead;

    const PLAINTEXT: &[u8] = b"Benchmarking AES encryption in Rust";

    fn key() -> SymmetricKey {
        let bytes: Vec<u8> = (0x00..=0x0f).collect();
        SymmetricKey::try_from(bytes.as_slice()).unwrap()
    }

    fn nonce() -> Nonce {
        let bytes: Vec<u8> = (0x00..=0x0f).rev().collect();
        Nonce::try_from(bytes.as_slice()).unwrap()
    }

    #[test]
    fn key_rejects_wrong_lengths() {
        for len in [0usize, 15, 17, 32] {
            let err = SymmetricKey::try_from(vec![0u8; len].as_slice()).unwrap_err();
            assert_eq!(
                err,
                EncryptionError::InvalidKeyLength {
                    expected: KEY_LEN,
                    actual: len
                }
            );
        }
    }

    #[test]
    fn nonce_rejects_twelve_bytes() {
        let err = Nonce::try_from([0u8; 12].as_slice()).unwrap_err();
        assert_eq!(
            err,
            EncryptionError::InvalidIvLength {
                expected: NONCE_LEN,
                actual: 12
            }
        );
    }

    #[test]
    fn key_debug_is_redacted() {
        assert_eq!(format!("{:?}", key()), "SymmetricKey { .. }");
        let sealer = PerCallSealer::new(key(), nonce());
        assert!(format!("{sealer:?}").contains("key: SymmetricKey { .. }"));
    }

    #[test]
    fn seal_output_has_plaintext_length_plus_tag() {
        let out = PerCallSealer::new(key(), nonce()).seal(PLAINTEXT).unwrap();
        assert_eq!(out.ciphertext.len(), PLAINTEXT.len());
        assert_eq!(out.sealed_len(), PLAINTEXT.len() + TAG_LEN);
        assert_ne!(out.ciphertext.as_slice(), PLAINTEXT);
    }

    #[test]
    fn seal_is_deterministic_under_fixed_key_and_nonce() {
        let sealer = PerCallSealer::new(key(), nonce());
        let first = sealer.seal(PLAINTEXT).unwrap();
        let second = sealer.seal(PLAINTEXT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn both_schedules_produce_identical_output() {
        let per_call = PerCallSealer::new(key(), nonce()).seal(PLAINTEXT).unwrap();
        let reused = ReusedSealer::new(key(), nonce()).seal(PLAINTEXT).unwrap();
        assert_eq!(per_call, reused);
    }

    #[test]
    fn detached_tag_matches_attached_encryption() {
        let out = ReusedSealer::new(key(), nonce()).seal(PLAINTEXT).unwrap();

        let cipher = Aes128Gcm16::new(&GenericArray::from(*key().as_bytes()));
        let attached = cipher
            .encrypt(&GenericArray::from(*nonce().as_bytes()), PLAINTEXT)
            .unwrap();

        let mut expected = out.ciphertext.clone();
        expected.extend_from_slice(&out.tag);
        assert_eq!(attached, expected);
    }

    #[test]
    fn empty_plaintext_yields_tag_only() {
        let out = PerCallSealer::new(key(), nonce()).seal(b"").unwrap();
        assert!(out.ciphertext.is_empty());
        assert_eq!(out.sealed_len(), TAG_LEN);
    }

    #[test]
    fn key_schedule_defaults_to_per_call() {
        assert_eq!(KeySchedule::default(), KeySchedule::PerCall);
        assert!(!KeySchedule::PerCall.reuses_cipher());
        assert!(KeySchedule::Reused.reuses_cipher());
    }
}
