//! Fingerprints for scores and thresholds.
//!
//! Two values are fingerprinted, both as xxHash64 (seed 0) over the
//! `serde_json` encoding, printed as 16 lowercase hex digits:
//!
//! - [`ConfidenceThresholds::params_hash`](crate::ConfidenceThresholds::params_hash)
//!   hashes the thresholds after quantizing them to integer millionths, so
//!   `0.9` and `0.900_000_000_1` share a fingerprint.
//! - [`ExplanationScores::scores_hash`](crate::ExplanationScores::scores_hash)
//!   hashes every metric value, the edge counts and the thresholds hash.
//!
//! Hashed structs only hold scalars and strings, so their JSON follows field
//! declaration order and is the same on every run and platform.

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// JSON bytes that a fingerprint is computed over.
///
/// Non-finite floats serialize as `null`. A value serde_json rejects
/// outright yields an empty byte string.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_default()
}

/// xxHash64 of [`to_canonical_bytes`].
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), 0)
}

/// [`canonical_hash`] as a zero-padded hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
