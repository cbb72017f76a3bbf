//! Bigram SimHash fingerprints.
//!
//! Traditional hash functions try to *minimize* collisions between similar
//! inputs. SimHash does the opposite: similar texts produce fingerprints
//! that differ in few bits, so Hamming distance approximates dissimilarity.
//!
//! **Key insight** (Charikar 2002): project the feature vector onto random
//! hyperplanes. Similar vectors land on the same side more often.
//!
//! ```text
//! P[sign(r·a) = sign(r·b)] = 1 - θ(a,b)/π
//! ```
//!
//! Here each feature's SHA-256 digest plays the role of 256 random ±1
//! hyperplane coordinates, and features are character bigrams.
//!
//! **Algorithm**:
//! 1. Split the text into overlapping 2-character shingles ([`shingles`])
//! 2. Hash each shingle to a 256-bit SHA-256 digest
//! 3. For each bit position, add 1 where the bit is set, subtract 1 where not
//! 4. Final fingerprint: `bit[i] = 1` if `sum[i] > 0`, else 0
//!
//! ```rust
//! use simprint::hash::fingerprint;
//!
//! let fp1 = fingerprint("the quick brown fox jumps over the lazy dog");
//! let fp2 = fingerprint("the quick brown fox jumps over the lazy dog");
//! assert_eq!(fp1.hamming_distance(&fp2), 0);
//! ```
//!
//! ## References
//!
//! - Charikar (2002). "Similarity estimation techniques from rounding algorithms."
//! - Manku et al. (2007). "Detecting near-duplicates for web crawling."

pub mod shingle;
pub mod simhash;

pub use shingle::{shingles, Shingles, SHINGLE_WIDTH};
pub use simhash::{
    fingerprint, fingerprint_features, Fingerprint, FINGERPRINT_BITS, FINGERPRINT_BYTES,
};
