//! Certificate fingerprint matching - selects which known key signed an app
//!
//! This is not a cryptographic re-verification. The platform already
//! verified the signature chain; the only question left is whether any of
//! the presented fingerprints is exactly the expected one.

/// Returns true iff any fingerprint in `signatures` equals `expected`
///
/// Exact string comparison. The result is identical for any permutation of
/// `signatures`. No side effects, cannot fail.
pub fn matches_fingerprint(signatures: &[String], expected: &str) -> bool {
    signatures.iter().any(|signature| signature == expected)
}
