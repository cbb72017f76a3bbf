//! simprint: 256-bit SimHash fingerprints of text.
//!
//! Two operations:
//!
//! - [`fingerprint`]: text to a 32-byte locality-sensitive fingerprint
//! - [`hamming_distance`]: number of differing bits between two fingerprints
//!
//! Features are overlapping character bigrams, hashed with SHA-256 and
//! combined by a per-bit majority vote. Everything is pure and stateless;
//! fingerprints can be computed from any number of threads at once.
//!
//! ```rust
//! use simprint::fingerprint;
//!
//! let a = fingerprint("The quick brown fox jumps over the lazy dog");
//! let b = fingerprint("The quick brown cat jumps over the lazy dog");
//!
//! assert_ne!(a.to_hex(), b.to_hex());
//! assert!(a.hamming_distance(&b) > 0);
//! assert_eq!(a.hamming_distance(&a), 0);
//! ```
//!
//! # Critical Nuances
//!
//! ## Ties resolve to zero
//!
//! A bit whose ballot sums to exactly 0 is emitted as 0. With an even
//! number of bigrams ties are common, and with zero bigrams (inputs shorter
//! than two characters) every bit ties, so `fingerprint("")` is all zeros.
//! This is part of the output format; changing it changes every fingerprint.
//!
//! ## Characters, not bytes
//!
//! Bigrams are cut on Unicode scalar values. `"世界"` is one bigram, not
//! five byte pairs. Grapheme clusters made of several scalars (flags,
//! skin-tone emoji) contribute one bigram per adjacent scalar pair.
//!
//! ## Distance is a trend, not a guarantee
//!
//! Fewer shared bigrams means a larger expected Hamming distance, but any
//! individual pair can buck the trend. Compare distances in aggregate.

pub mod distance;
pub mod error;
pub mod hash;

// Re-exports
pub use distance::hamming_distance;
pub use error::{Result, SimhashError};
pub use hash::{
    fingerprint, fingerprint_features, shingles, Fingerprint, Shingles, FINGERPRINT_BITS,
    FINGERPRINT_BYTES, SHINGLE_WIDTH,
};
