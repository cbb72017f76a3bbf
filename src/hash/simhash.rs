//! SimHash over SHA-256 hashed character bigrams.
//!
//! ## Algorithm
//!
//! For a text split into overlapping bigrams (see [`shingles`]):
//! 1. Initialize a 256-entry signed ballot to 0
//! 2. For each bigram b:
//!    - Hash b with SHA-256 to get a 256-bit digest h
//!    - For each bit: `V[i] += 1` if `h[i]=1`, else `V[i] -= 1`
//! 3. `Fingerprint[i] = 1` if `V[i] > 0`, else 0 (ties go to 0)
//!
//! Bit `i` lives in byte `i / 8` at position `i % 8` (LSB first), both when
//! reading the digest and when packing the fingerprint.
//!
//! ## Properties
//!
//! - Same text, same fingerprint; there is no seed and no shared state
//! - 32 bytes regardless of input length; the empty string maps to all zeros
//! - Hamming distance grows with the fraction of bigrams that differ

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use super::shingle::shingles;
use crate::error::{Result, SimhashError};

/// Number of bits in a fingerprint.
pub const FINGERPRINT_BITS: usize = 256;

/// Number of bytes in a fingerprint.
pub const FINGERPRINT_BYTES: usize = FINGERPRINT_BITS / 8;

/// Compute the SimHash fingerprint of `text`.
///
/// Never fails: any `&str`, including the empty string, produces a
/// well-defined 32-byte fingerprint.
///
/// ```rust
/// use simprint::fingerprint;
///
/// let fp = fingerprint("The quick brown fox jumps over the lazy dog");
/// assert_eq!(fp.bytes().len(), 32);
/// assert_eq!(fp.to_hex().len(), 64);
/// assert_eq!(fp, fingerprint("The quick brown fox jumps over the lazy dog"));
/// ```
pub fn fingerprint(text: &str) -> Fingerprint {
    fingerprint_features(shingles(text))
}

/// Compute a SimHash fingerprint from an arbitrary feature sequence.
///
/// Every feature has weight 1 and is hashed over its raw bytes. Use this
/// when features come from somewhere other than character bigrams, e.g.
/// word tokens.
pub fn fingerprint_features<I>(features: I) -> Fingerprint
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut ballot = [0i64; FINGERPRINT_BITS];
    let mut voted = 0usize;

    for feature in features {
        let digest = Sha256::digest(feature.as_ref());
        for (byte_idx, &byte) in digest.iter().enumerate() {
            for bit in 0..8 {
                let slot = &mut ballot[byte_idx * 8 + bit];
                if (byte >> bit) & 1 == 1 {
                    *slot += 1;
                } else {
                    *slot -= 1;
                }
            }
        }
        voted += 1;
    }

    let mut bytes = [0u8; FINGERPRINT_BYTES];
    for (i, &votes) in ballot.iter().enumerate() {
        if votes > 0 {
            bytes[i / 8] |= 1 << (i % 8);
        }
    }

    tracing::trace!(features = voted, "computed simhash fingerprint");
    Fingerprint(bytes)
}

/// A 256-bit SimHash fingerprint.
///
/// Displays (and parses) as 64 lowercase hex characters, first byte first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_BYTES]);

impl Fingerprint {
    /// Wrap raw fingerprint bytes.
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_BYTES]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn bytes(&self) -> &[u8; FINGERPRINT_BYTES] {
        &self.0
    }

    /// Consume into the raw bytes.
    pub fn into_bytes(self) -> [u8; FINGERPRINT_BYTES] {
        self.0
    }

    /// Lowercase hex encoding (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex string (either case).
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; FINGERPRINT_BYTES];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Whether bit `i` (0..256) is set.
    ///
    /// # Panics
    ///
    /// If `i >= 256`.
    pub fn bit(&self, i: usize) -> bool {
        (self.0[i / 8] >> (i % 8)) & 1 == 1
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }

    /// Hamming distance to another fingerprint, in `[0, 256]`.
    ///
    /// Number of bit positions that differ.
    pub fn hamming_distance(&self, other: &Fingerprint) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }

    /// Fraction of agreeing bits, `1 - d / 256`.
    pub fn similarity(&self, other: &Fingerprint) -> f64 {
        1.0 - self.hamming_distance(other) as f64 / FINGERPRINT_BITS as f64
    }

    /// Estimated cosine similarity from Hamming distance.
    ///
    /// Based on cos(π * d / bits) approximation.
    pub fn estimated_cosine(&self, other: &Fingerprint) -> f64 {
        let d = self.hamming_distance(other);
        let theta = std::f64::consts::PI * (d as f64) / (FINGERPRINT_BITS as f64);
        theta.cos()
    }

    /// Check if similar within threshold (Hamming distance).
    pub fn is_similar(&self, other: &Fingerprint, max_distance: u32) -> bool {
        self.hamming_distance(other) <= max_distance
    }

    /// Order two fingerprints by their distance to `self`.
    pub fn cmp_by_distance(&self, a: &Fingerprint, b: &Fingerprint) -> Ordering {
        self.hamming_distance(a).cmp(&self.hamming_distance(b))
    }
}

impl From<[u8; FINGERPRINT_BYTES]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Fingerprint> for [u8; FINGERPRINT_BYTES] {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

impl TryFrom<&[u8]> for Fingerprint {
    type Error = SimhashError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; FINGERPRINT_BYTES] =
            bytes.try_into().map_err(|_| SimhashError::LengthMismatch {
                left: bytes.len(),
                right: FINGERPRINT_BYTES,
            })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl FromStr for Fingerprint {
    type Err = SimhashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
