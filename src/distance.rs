//! Hamming distance over raw fingerprint bytes.
//!
//! [`Fingerprint::hamming_distance`](crate::Fingerprint::hamming_distance)
//! is the typed, infallible form. This module serves callers that only hold
//! byte slices (e.g. fingerprints read back from their own storage), where
//! equal length cannot be guaranteed by the type system.

use crate::error::{Result, SimhashError};

/// Number of differing bits between `a` and `b`.
///
/// XORs the slices byte by byte and sums the popcounts. The result lies in
/// `[0, 8 * a.len()]`, is symmetric, and is 0 when `a == b`.
///
/// # Errors
///
/// [`SimhashError::LengthMismatch`] if the slices differ in length.
///
/// ```rust
/// use simprint::{fingerprint, hamming_distance};
///
/// let a = fingerprint("The quick brown fox jumps over the lazy dog");
/// let b = fingerprint("The quick brown cat jumps over the lazy dog");
/// let d = hamming_distance(a.bytes(), b.bytes()).unwrap();
/// assert!(d > 0);
/// assert_eq!(d, hamming_distance(b.bytes(), a.bytes()).unwrap());
/// ```
#[inline]
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<u32> {
    if a.len() != b.len() {
        tracing::debug!(
            left = a.len(),
            right = b.len(),
            "rejecting hamming distance over unequal lengths"
        );
        return Err(SimhashError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum())
}
