//! Checksums of embedded migration SQL
//!
//! A recorded migration whose SQL no longer hashes to the stored value means
//! the embedded file was edited after release.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 of `content`
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
